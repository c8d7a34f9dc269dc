#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use serde::{Deserialize, Serialize};

    use crate::persisted::Persisted;
    use crate::store::FileStore;

    fn store() -> (tempfile::TempDir, Rc<FileStore>) {
        let dir = tempfile::tempdir().unwrap();
        let store = Rc::new(FileStore::new(dir.path()).unwrap());
        (dir, store)
    }

    #[test]
    fn test_store_read_write_remove() {
        let (_dir, store) = store();
        assert_eq!(store.read("missing").unwrap(), None);

        store.write("k", "\"v\"").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("\"v\""));

        store.remove("k").unwrap();
        assert_eq!(store.read("k").unwrap(), None);
        store.remove("k").unwrap(); // absent key is fine
    }

    #[test]
    fn test_store_sanitizes_keys() {
        let (dir, store) = store();
        store.write("a/b:c", "\"x\"").unwrap();
        assert_eq!(store.read("a/b:c").unwrap().as_deref(), Some("\"x\""));
        // nothing escaped the directory
        assert!(dir.path().join("a-b-c.json").exists());
    }

    #[test]
    fn test_persisted_starts_from_default() {
        let (_dir, store) = store();
        let p = Persisted::load(store, "volume", 50u32);
        assert_eq!(p.value(), 50);
    }

    #[test]
    fn test_persisted_round_trip() {
        let (_dir, store) = store();

        let p = Persisted::load(store.clone(), "volume", 50u32);
        p.set(80);

        let restored = Persisted::load(store, "volume", 50u32);
        assert_eq!(restored.value(), 80);
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Prefs {
        theme: String,
        columns: Vec<String>,
    }

    #[test]
    fn test_persisted_struct_update() {
        let (_dir, store) = store();
        let default = Prefs {
            theme: "dark".into(),
            columns: vec!["name".into()],
        };

        let p = Persisted::load(store.clone(), "prefs", default.clone());
        p.update(|prefs| prefs.columns.push("size".into()));

        let restored = Persisted::load(store, "prefs", default);
        assert_eq!(restored.value().columns, vec!["name", "size"]);
        assert_eq!(restored.value().theme, "dark");
    }

    #[test]
    fn test_persisted_discards_corrupt_entry() {
        let (_dir, store) = store();
        store.write("volume", "not json {").unwrap();

        let p = Persisted::load(store.clone(), "volume", 50u32);
        assert_eq!(p.value(), 50);

        // the next write repairs the mirror
        p.set(60);
        let restored = Persisted::load(store, "volume", 0u32);
        assert_eq!(restored.value(), 60);
    }

    #[test]
    fn test_persisted_flush() {
        let (_dir, store) = store();
        let p = Persisted::load(store, "n", 1u32);
        p.flush().unwrap();
    }
}
