#[cfg(test)]
mod tests {
    use std::{env, fs, path::PathBuf};

    use event_engine::Host;
    use serde_json::json;
    use uuid::Uuid;

    use crate::host::TerminalHost;

    fn temp_file() -> PathBuf {
        env::temp_dir().join(format!("pagert-storage-{}.json", Uuid::new_v4()))
    }

    #[test]
    fn storage_file_accumulates_keys() {
        let path = temp_file();
        let host = TerminalHost::new(Some(path.clone()));
        host.set_local_storage("a", "1").unwrap();
        host.set_local_storage("b", r#"{"x":true}"#).unwrap();
        host.set_local_storage("a", "2").unwrap();

        let reloaded = TerminalHost::new(Some(path.clone()));
        let map = reloaded.local_storage().unwrap();
        assert_eq!(map["a"], json!("2"));
        assert_eq!(map["b"], json!(r#"{"x":true}"#));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn storage_without_path_stays_in_memory() {
        let host = TerminalHost::new(None);
        host.set_local_storage("k", "\"v\"").unwrap();
        assert_eq!(host.local_storage().unwrap()["k"], json!("\"v\""));
    }

    #[test]
    fn non_object_storage_file_is_an_error() {
        let path = temp_file();
        fs::write(&path, "[1, 2]").unwrap();
        let host = TerminalHost::new(Some(path.clone()));
        assert!(host.set_local_storage("k", "1").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[1, 2]");
        fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn clipboard_is_kept_in_memory() {
        let host = TerminalHost::new(None);
        assert!(host.clipboard().is_none());
        host.write_clipboard("copied").await.unwrap();
        assert_eq!(host.clipboard().as_deref(), Some("copied"));
    }
}
