//! Full command flows through the public API: resolve → render → insert
//! → remember, against a recording target and a real state file.

use svg_placeholder::commands::{CommandError, Session};
use svg_placeholder::dimensions::{DimensionPair, Limits};
use svg_placeholder::host::{HostError, InsertionTarget};
use svg_placeholder::prefs::{JsonFileStore, PreferenceStore, Preferences};
use svg_placeholder::presets::Preset;
use svg_placeholder::ratio::{Orientation, RatioSpec, ResolveMode};
use svg_placeholder::svg;
use tempfile::TempDir;

/// Stand-in document: every insertion is appended in order.
#[derive(Default)]
struct Document {
    insertions: Vec<String>,
    read_only: bool,
}

impl InsertionTarget for Document {
    fn insert_at_selections(&mut self, text: &str) -> Result<(), HostError> {
        if self.read_only {
            return Err(HostError::EditRejected("document is read-only".to_string()));
        }
        self.insertions.push(text.to_string());
        Ok(())
    }
}

#[test]
fn literal_flow_persists_across_sessions() {
    let tmp = TempDir::new().unwrap();
    let state = tmp.path().join("state.json");

    let mut doc = Document::default();
    let mut store = JsonFileStore::new(&state);
    let mut session = Session::new(&mut doc, &mut store, Limits::default());

    let pair = session.insert_literal("1024 × 768").unwrap();
    assert_eq!(
        pair,
        DimensionPair {
            width: 1024,
            height: 768
        }
    );
    assert_eq!(doc.insertions, vec![svg::data_uri(pair)]);

    // A fresh session over the same state file pre-fills with the pair.
    let mut doc = Document::default();
    let mut store = JsonFileStore::new(&state);
    let session = Session::new(&mut doc, &mut store, Limits::default());
    assert_eq!(session.suggested_literal(), pair);
}

#[test]
fn ratio_flow_inserts_derived_pair() {
    let tmp = TempDir::new().unwrap();
    let mut doc = Document::default();
    let mut store = JsonFileStore::new(tmp.path().join("state.json"));
    let mut session = Session::new(&mut doc, &mut store, Limits::default());

    let pair = session
        .insert_from_ratio(
            RatioSpec { a: 4, b: 3 },
            Orientation::Portrait,
            ResolveMode::FromWidth,
            900,
        )
        .unwrap();
    assert_eq!((pair.width, pair.height), (900, 1200));

    let uri = &doc.insertions[0];
    assert!(uri.starts_with("data:image/svg+xml;utf8,"));
    assert!(uri.contains("900 × 1200"));

    let prefs = store.load();
    assert_eq!(prefs.last_ratio, Some(RatioSpec { a: 4, b: 3 }));
    assert_eq!(prefs.last_orientation, Some(Orientation::Portrait));
    assert_eq!(prefs.last_base, Some(900));
}

#[test]
fn preset_flow_repeats_identical_bytes() {
    let tmp = TempDir::new().unwrap();
    let mut doc = Document::default();
    let mut store = JsonFileStore::new(tmp.path().join("state.json"));
    let mut session = Session::new(&mut doc, &mut store, Limits::default());

    for preset in Preset::ALL {
        session.insert_preset(preset).unwrap();
    }
    session.insert_preset(Preset::Hero).unwrap();

    assert_eq!(doc.insertions.len(), 4);
    // The second hero insertion is served from the cache and must be
    // byte-identical to the first.
    assert_eq!(doc.insertions[0], doc.insertions[3]);
    assert_eq!(doc.insertions[0], svg::data_uri(Preset::Hero.dimensions()));
}

#[test]
fn rejected_edit_keeps_state_file_unchanged() {
    let tmp = TempDir::new().unwrap();
    let state = tmp.path().join("state.json");

    let mut doc = Document::default();
    let mut store = JsonFileStore::new(&state);
    let mut session = Session::new(&mut doc, &mut store, Limits::default());
    session.insert_literal("640x480").unwrap();

    let mut doc = Document {
        read_only: true,
        ..Document::default()
    };
    let mut store = JsonFileStore::new(&state);
    let mut session = Session::new(&mut doc, &mut store, Limits::default());
    let result = session.insert_literal("1200x600");
    assert!(matches!(
        result,
        Err(CommandError::Host(HostError::EditRejected(_)))
    ));

    let prefs = JsonFileStore::new(&state).load();
    assert_eq!(
        prefs.last_dims,
        Some(DimensionPair {
            width: 640,
            height: 480
        })
    );
}

#[test]
fn fresh_state_starts_with_stock_suggestions() {
    let tmp = TempDir::new().unwrap();
    let mut doc = Document::default();
    let mut store = JsonFileStore::new(tmp.path().join("nonexistent.json"));
    let session = Session::new(&mut doc, &mut store, Limits::default());

    assert_eq!(session.suggested_literal().to_string(), "1200×600");
    assert_eq!(session.suggested_base(), 1200);
    assert_eq!(store.load(), Preferences::default());
}
