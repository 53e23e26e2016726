//! Property-based tests for the header format.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use stdheader::core::header::{HeaderInfo, Identity, Stamp};
use stdheader::core::layout::{HEADER_ROWS, HEADER_WIDTH};
use stdheader::core::parse::{extract_header, get_header_info};
use stdheader::core::render::render_header;
use stdheader::core::style::{comment_style, supported_languages};
use stdheader::engine::plan::{plan, Edit, Plan};
use stdheader::engine::{Document, Mode};

/// Strategy for picking a supported language id.
fn language() -> impl Strategy<Value = &'static str> {
    let ids: Vec<&'static str> = supported_languages().map(|(id, _)| id).collect();
    prop::sample::select(ids)
}

/// Strategy for file names that fit the filename span.
fn filename() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_][A-Za-z0-9_.-]{0,30}"
}

/// Strategy for identities whose `user <email>` fits the author span.
fn identity() -> impl Strategy<Value = Identity> {
    ("[a-z][a-z0-9_-]{0,7}", "[a-z0-9.]{1,10}", "[a-z0-9]{1,8}\\.[a-z]{2,3}")
        .prop_map(|(user, local, domain)| Identity::new(user.clone(), format!("{local}@{domain}")))
}

/// Strategy for identities too wide for the author and `by` spans.
fn long_identity() -> impl Strategy<Value = Identity> {
    ("[a-z][a-z0-9_-]{11,20}", "[a-z0-9.-]{20,40}", "[a-z0-9]{1,8}\\.[a-z]{2,3}")
        .prop_map(|(user, local, domain)| Identity::new(user, format!("{local}@{domain}")))
}

/// Strategy for whole-second timestamps with four-digit years.
fn timestamp() -> impl Strategy<Value = NaiveDateTime> {
    (1970i32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_map(
        |(y, mo, d, h, mi, s)| {
            NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_opt(h, mi, s)
                .unwrap()
        },
    )
}

fn stamp() -> impl Strategy<Value = Stamp> {
    (filename(), identity(), timestamp())
        .prop_map(|(name, identity, now)| Stamp::new(name, identity, now))
}

/// Strategy for document bodies, including empty ones and odd lines.
fn body() -> impl Strategy<Value = String> {
    prop::collection::vec("[ -~\t]{0,100}", 0..20).prop_map(|lines| {
        lines
            .into_iter()
            .map(|line| format!("{line}\n"))
            .collect()
    })
}

proptest! {
    /// Every rendered header is HEADER_ROWS lines of HEADER_WIDTH chars,
    /// framed by the language's delimiters.
    #[test]
    fn rendered_geometry(lang in language(), stamp in stamp()) {
        let info = HeaderInfo::stamp(None, &stamp);
        let header = render_header(lang, &info).unwrap();
        let (left, right) = comment_style(lang).delimiters().unwrap();

        let lines: Vec<&str> = header.lines().collect();
        prop_assert_eq!(lines.len(), HEADER_ROWS);
        for line in lines {
            prop_assert_eq!(line.chars().count(), HEADER_WIDTH);
            prop_assert!(line.starts_with(&left));
            prop_assert!(line.ends_with(&right));
        }
    }

    /// Fields that fit their spans decode to what was rendered.
    #[test]
    fn render_parse_roundtrip(lang in language(), stamp in stamp()) {
        let info = HeaderInfo::stamp(None, &stamp);
        let header = render_header(lang, &info).unwrap();
        let raw = extract_header(&header).expect("rendered header is recognized");
        prop_assert_eq!(get_header_info(&raw).unwrap(), info);
    }

    /// Refreshing keeps the creation fields and takes everything else from
    /// the new stamp.
    #[test]
    fn stamp_merge(first in stamp(), second in stamp()) {
        let created = HeaderInfo::stamp(None, &first);
        let refreshed = HeaderInfo::stamp(Some(&created), &second);

        prop_assert_eq!(refreshed.created_at, created.created_at);
        prop_assert_eq!(&refreshed.created_by, &created.created_by);
        prop_assert_eq!(&refreshed.filename, &second.filename);
        prop_assert_eq!(refreshed.updated_at, second.now);
        prop_assert_eq!(&refreshed.updated_by, &second.identity.user);
        prop_assert_eq!(refreshed.author.user(), second.identity.user.as_str());
    }

    /// Insert then refresh keeps the body byte-for-byte, and refreshing
    /// twice with the same stamp changes nothing.
    #[test]
    fn refresh_preserves_body_and_is_idempotent(
        lang in language(),
        text in body(),
        first in stamp(),
        second in stamp(),
    ) {
        let doc = Document::new(text.clone(), lang, first.filename.clone());
        let inserted = plan(&doc, &first.identity, first.now, Mode::Insert)
            .unwrap()
            .apply(&doc.text)
            .unwrap();
        prop_assert!(inserted.ends_with(&text));

        let doc = Document::new(inserted.clone(), lang, second.filename.clone());
        let refreshed = plan(&doc, &second.identity, second.now, Mode::Update)
            .unwrap()
            .apply(&doc.text)
            .unwrap();
        prop_assert_eq!(refreshed.len(), inserted.len());
        prop_assert!(refreshed.ends_with(&text));

        let doc = Document::new(refreshed.clone(), lang, second.filename.clone());
        let again = plan(&doc, &second.identity, second.now, Mode::Update)
            .unwrap()
            .apply(&doc.text)
            .unwrap();
        prop_assert_eq!(again, refreshed);
    }

    /// Identities wider than their spans are cut on render, and the cut
    /// header still refreshes with its creation fields intact.
    #[test]
    fn long_identity_refresh_keeps_creation(
        lang in language(),
        text in body(),
        creator in long_identity(),
        updater in long_identity(),
        created in timestamp(),
        updated in timestamp(),
    ) {
        let doc = Document::new(text.clone(), lang, "main.c");
        let inserted = plan(&doc, &creator, created, Mode::Insert)
            .unwrap()
            .apply(&doc.text)
            .unwrap();
        let first = get_header_info(&extract_header(&inserted).unwrap()).unwrap();
        prop_assert_eq!(first.created_at, created);

        let doc = Document::new(inserted, lang, "main.c");
        let refresh = plan(&doc, &updater, updated, Mode::Update).unwrap();
        let is_clean_replace = matches!(
            &refresh,
            Plan::Write { edit: Edit::Replace { .. }, replaced: None, .. }
        );
        prop_assert!(is_clean_replace, "refresh was {:?}", refresh);

        let refreshed = refresh.apply(&doc.text).unwrap();
        prop_assert!(refreshed.ends_with(&text));
        let info = get_header_info(&extract_header(&refreshed).unwrap()).unwrap();
        prop_assert_eq!(info.created_at, first.created_at);
        prop_assert_eq!(&info.created_by, &first.created_by);
        prop_assert_eq!(info.updated_at, updated);
        prop_assert!(updater.user.starts_with(&info.updated_by));
    }

    /// Text that does not start with a frame has no header.
    #[test]
    fn plain_text_has_no_header(text in body()) {
        prop_assume!(!text.starts_with("/*") && !text.starts_with('#'));
        prop_assert_eq!(extract_header(&text), None);
    }
}
