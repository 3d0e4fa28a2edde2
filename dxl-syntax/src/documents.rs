//! The latest parse of every open document.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::{debug, trace};
use smol_str::SmolStr;

use crate::source::LineIndex;
use crate::syntax::lex::tokenize;
use crate::syntax::parse::{parse, Parse};
use crate::syntax::red;

#[derive(Debug)]
pub struct Document {
    pub version: i32,
    pub text: String,
    pub parse: Parse,
    pub lines: LineIndex,
}

impl Document {
    pub fn new(version: i32, text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = tokenize(&text);
        let parse = parse(&tokens);
        let lines = tokens.line_index();

        Self { version, text, parse, lines }
    }

    pub fn root(&self) -> red::Node<'_> {
        red::Node::new_root(&self.parse.tree, 0)
    }
}

/// Documents by name. Safe to share between threads.
#[derive(Debug, Default)]
pub struct Documents {
    documents: DashMap<SmolStr, Arc<Document>>,
}

impl Documents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the document called `name` at `version`, reparsing `text` unless
    /// that version is already known. Concurrent updates of the same name are
    /// serialized.
    pub fn update(&self, name: &str, version: i32, text: impl Into<String>) -> Arc<Document> {
        match self.documents.entry(name.into()) {
            Entry::Occupied(entry) if entry.get().version == version => {
                trace!("reusing version {version} of {name}");
                entry.get().clone()
            }

            Entry::Occupied(mut entry) => {
                debug!("reparsing {name} at version {version}");
                let document = Arc::new(Document::new(version, text));
                entry.insert(document.clone());
                document
            }

            Entry::Vacant(entry) => {
                debug!("parsing {name} at version {version}");
                entry.insert(Arc::new(Document::new(version, text))).value().clone()
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<Document>> {
        self.documents.get(name).map(|entry| entry.value().clone())
    }

    pub fn remove(&self, name: &str) -> Option<Arc<Document>> {
        debug!("closing {name}");
        self.documents.remove(name).map(|(_, document)| document)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::Documents;

    #[test]
    fn same_version_is_reused() {
        let _ = pretty_env_logger::try_init();

        let documents = Documents::new();
        let first = documents.update("a.dxl", 1, "int a = 1");
        let second = documents.update("a.dxl", 1, "int a = 2");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!("int a = 1", second.text);
    }

    #[test]
    fn new_version_is_reparsed() {
        let _ = pretty_env_logger::try_init();

        let documents = Documents::new();
        documents.update("a.dxl", 1, "int a = 1");
        let document = documents.update("a.dxl", 2, "int a = (");

        assert_eq!(2, document.version);
        assert!(!document.parse.errors.is_perfect());
        assert_eq!("int a = (", document.root().text());
        assert_eq!(1, documents.len());
    }

    #[test]
    fn concurrent_updates_parse_once() {
        let _ = pretty_env_logger::try_init();

        let documents = Documents::new();
        let parsed: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| documents.update("a.dxl", 3, "int a = 1")))
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().expect("the update does not panic"))
                .collect()
        });

        assert!(parsed.iter().all(|document| Arc::ptr_eq(document, &parsed[0])));
        assert_eq!(1, documents.len());
    }

    #[test]
    fn documents_are_independent() {
        let documents = Documents::new();
        documents.update("a.dxl", 1, "a\nb");
        documents.update("b.dxl", 1, "c");

        assert_eq!(Some(2), documents.get("a.dxl").map(|document| document.lines.num_lines()));
        assert!(documents.remove("a.dxl").is_some());
        assert!(documents.get("a.dxl").is_none());
        assert!(documents.get("b.dxl").is_some());
        assert!(documents.remove("a.dxl").is_none());
    }
}
