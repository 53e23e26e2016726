//! core::style
//!
//! Comment style table keyed by language identifier.
//!
//! # Styles
//!
//! Every row of a header frame is wrapped in comment delimiters. A language
//! either wraps each row in a block comment (`/* ... */`, `(* ... *)`,
//! `<!-- ... -->`) or repeats its line-comment token at both ends of the row
//! (`# ... #`, `-- ... --`). Languages without an entry are unsupported.
//!
//! Adding a language is a new row in [`LANGUAGES`]; no other code changes.
//!
//! # Example
//!
//! ```
//! use stdheader::core::style::{comment_style, supports_language, CommentStyle};
//!
//! assert!(supports_language("c"));
//! assert!(!supports_language("brainfuck"));
//!
//! let style = comment_style("python");
//! assert_eq!(style.delimiters(), Some(("# ".to_string(), " #".to_string())));
//! assert_eq!(comment_style("brainfuck"), CommentStyle::Unsupported);
//! ```

use std::path::Path;

/// Comment delimiter style for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// Each row is wrapped as `open ... close`.
    Block {
        open: &'static str,
        close: &'static str,
    },
    /// Each row starts and ends with the line-comment token.
    LineRepeated { token: &'static str },
    /// No header support for this language.
    Unsupported,
}

impl CommentStyle {
    /// Whether headers can be rendered in this style.
    pub fn is_supported(&self) -> bool {
        !matches!(self, CommentStyle::Unsupported)
    }

    /// The strings written into the left and right margins of every row.
    ///
    /// Includes the space separating the token from the frame interior.
    /// Returns `None` for [`CommentStyle::Unsupported`].
    pub fn delimiters(&self) -> Option<(String, String)> {
        match self {
            CommentStyle::Block { open, close } => {
                Some((format!("{} ", open), format!(" {}", close)))
            }
            CommentStyle::LineRepeated { token } => {
                Some((format!("{} ", token), format!(" {}", token)))
            }
            CommentStyle::Unsupported => None,
        }
    }

    /// Short human-readable description, e.g. `/* */` or `#`.
    pub fn describe(&self) -> String {
        match self {
            CommentStyle::Block { open, close } => format!("{} {}", open, close),
            CommentStyle::LineRepeated { token } => token.to_string(),
            CommentStyle::Unsupported => "unsupported".to_string(),
        }
    }
}

const C_BLOCK: CommentStyle = CommentStyle::Block {
    open: "/*",
    close: "*/",
};
const ML_BLOCK: CommentStyle = CommentStyle::Block {
    open: "(*",
    close: "*)",
};
const MARKUP_BLOCK: CommentStyle = CommentStyle::Block {
    open: "<!--",
    close: "-->",
};
const HASH: CommentStyle = CommentStyle::LineRepeated { token: "#" };
const DASHES: CommentStyle = CommentStyle::LineRepeated { token: "--" };

/// Supported languages and their comment styles, in display order.
pub const LANGUAGES: &[(&str, CommentStyle)] = &[
    ("c", C_BLOCK),
    ("coffeescript", HASH),
    ("cpp", C_BLOCK),
    ("css", C_BLOCK),
    ("dockerfile", HASH),
    ("fsharp", ML_BLOCK),
    ("go", C_BLOCK),
    ("haskell", DASHES),
    ("html", MARKUP_BLOCK),
    ("ini", CommentStyle::LineRepeated { token: ";" }),
    ("java", C_BLOCK),
    ("javascript", C_BLOCK),
    ("javascriptreact", C_BLOCK),
    ("kotlin", C_BLOCK),
    ("latex", CommentStyle::LineRepeated { token: "%" }),
    ("less", C_BLOCK),
    ("lua", DASHES),
    ("makefile", HASH),
    ("objective-c", C_BLOCK),
    ("ocaml", ML_BLOCK),
    ("perl", HASH),
    ("perl6", HASH),
    ("php", C_BLOCK),
    ("plaintext", CommentStyle::LineRepeated { token: "*" }),
    ("powershell", HASH),
    ("python", HASH),
    ("r", HASH),
    ("ruby", HASH),
    ("rust", C_BLOCK),
    ("scss", C_BLOCK),
    ("shellscript", HASH),
    ("sql", DASHES),
    ("swift", C_BLOCK),
    ("toml", HASH),
    ("typescript", C_BLOCK),
    ("typescriptreact", C_BLOCK),
    ("xml", MARKUP_BLOCK),
    ("xsl", MARKUP_BLOCK),
    ("yaml", HASH),
];

/// File extensions (lowercase) mapped to language ids.
const EXTENSIONS: &[(&str, &str)] = &[
    ("c", "c"),
    ("h", "c"),
    ("cc", "cpp"),
    ("cpp", "cpp"),
    ("cxx", "cpp"),
    ("hh", "cpp"),
    ("hpp", "cpp"),
    ("tpp", "cpp"),
    ("coffee", "coffeescript"),
    ("css", "css"),
    ("fs", "fsharp"),
    ("fsi", "fsharp"),
    ("go", "go"),
    ("hs", "haskell"),
    ("htm", "html"),
    ("html", "html"),
    ("ini", "ini"),
    ("java", "java"),
    ("js", "javascript"),
    ("mjs", "javascript"),
    ("cjs", "javascript"),
    ("jsx", "javascriptreact"),
    ("kt", "kotlin"),
    ("kts", "kotlin"),
    ("tex", "latex"),
    ("less", "less"),
    ("lua", "lua"),
    ("mk", "makefile"),
    ("m", "objective-c"),
    ("ml", "ocaml"),
    ("mli", "ocaml"),
    ("pl", "perl"),
    ("pm", "perl"),
    ("raku", "perl6"),
    ("p6", "perl6"),
    ("php", "php"),
    ("txt", "plaintext"),
    ("ps1", "powershell"),
    ("py", "python"),
    ("r", "r"),
    ("rb", "ruby"),
    ("rs", "rust"),
    ("scss", "scss"),
    ("sh", "shellscript"),
    ("bash", "shellscript"),
    ("zsh", "shellscript"),
    ("sql", "sql"),
    ("swift", "swift"),
    ("toml", "toml"),
    ("ts", "typescript"),
    ("tsx", "typescriptreact"),
    ("xml", "xml"),
    ("xsl", "xsl"),
    ("xslt", "xsl"),
    ("yml", "yaml"),
    ("yaml", "yaml"),
];

/// Whole file names mapped to language ids.
const FILE_NAMES: &[(&str, &str)] = &[
    ("makefile", "makefile"),
    ("gnumakefile", "makefile"),
    ("dockerfile", "dockerfile"),
];

/// Look up the comment style for a language id.
///
/// Unknown ids yield [`CommentStyle::Unsupported`].
pub fn comment_style(language_id: &str) -> CommentStyle {
    LANGUAGES
        .iter()
        .find(|(id, _)| *id == language_id)
        .map(|(_, style)| *style)
        .unwrap_or(CommentStyle::Unsupported)
}

/// Check whether headers can be rendered for a language id.
pub fn supports_language(language_id: &str) -> bool {
    comment_style(language_id).is_supported()
}

/// Iterate over every supported language and its style.
pub fn supported_languages() -> impl Iterator<Item = (&'static str, CommentStyle)> {
    LANGUAGES
        .iter()
        .filter(|(_, style)| style.is_supported())
        .copied()
}

/// Detect a language id from a file path.
///
/// Well-known file names (`Makefile`, `Dockerfile`) win over extensions.
/// Matching is case-insensitive.
pub fn language_for_path(path: &Path) -> Option<&'static str> {
    let file_name = path.file_name()?.to_str()?.to_ascii_lowercase();

    if let Some((_, id)) = FILE_NAMES.iter().find(|(name, _)| *name == file_name) {
        return Some(*id);
    }

    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    EXTENSIONS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, id)| *id)
}
