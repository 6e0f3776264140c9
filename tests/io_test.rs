use std::fs;
use tempfile::TempDir;
use tmd::Config;
use tmd::document::io::{create_document_file, new_document_text, save_document, unique_tmd_path};
use tmd::document::{edit, load_document, serialize};

#[cfg(test)]
mod load_save_tests {
    use super::*;

    #[tokio::test]
    async fn test_load_fixture() {
        let document = load_document(std::path::Path::new("tests/fixtures/leg-day.tmd"))
            .await
            .unwrap();

        assert_eq!(document.title.as_deref(), Some("Leg Day"));
        assert_eq!(document.exercises.len(), 3);
        assert_eq!(
            document.exercises[0].note.as_deref(),
            Some("Slept badly, kept the weights conservative.")
        );
        assert_eq!(document.exercises[1].column_count(), 3);
    }

    #[tokio::test]
    async fn test_load_rejects_other_extensions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "### Squat\n").unwrap();

        let error = load_document(&path).await.unwrap_err();
        assert!(error.to_string().contains("Expected .tmd file"));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(load_document(&dir.path().join("missing.tmd")).await.is_err());
    }

    #[tokio::test]
    async fn test_edit_save_reload_cycle() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.tmd");
        fs::write(&path, "[[Legs]]\n\n### Squat\n| Weight | Reps |\n| --- | --- |\n| 100 | 5 |\n").unwrap();

        let document = load_document(&path).await.unwrap();
        let document = edit::add_row(&document, 0).unwrap();
        let document = edit::set_cell(&document, 0, 2, 0, "105").unwrap();
        let document = edit::set_cell(&document, 0, 2, 1, "3").unwrap();
        save_document(&path, &document).await.unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "[[Legs]]\n\n### Squat\n| Weight | Reps |\n| 100 | 5 |\n| 105 | 3 |\n"
        );
        assert_eq!(load_document(&path).await.unwrap(), document);
        assert_eq!(serialize(&document), written);
    }
}

#[cfg(test)]
mod new_file_tests {
    use super::*;

    #[test]
    fn test_unique_path_adds_counter() {
        let dir = TempDir::new().unwrap();

        let first = unique_tmd_path(dir.path(), "18.10.26");
        assert_eq!(first.file_name().unwrap(), "18.10.26.tmd");
        fs::write(&first, "").unwrap();

        let second = unique_tmd_path(dir.path(), "18.10.26");
        assert_eq!(second.file_name().unwrap(), "18.10.26 1.tmd");
        fs::write(&second, "").unwrap();

        let third = unique_tmd_path(dir.path(), "18.10.26");
        assert_eq!(third.file_name().unwrap(), "18.10.26 2.tmd");
    }

    #[tokio::test]
    async fn test_create_writes_template() {
        let dir = TempDir::new().unwrap();
        let path = unique_tmd_path(dir.path(), "18.10.26");
        let text = new_document_text(&Config::default());

        create_document_file(&path, &text).await.unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), text);
    }

    #[tokio::test]
    async fn test_create_never_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = unique_tmd_path(dir.path(), "18.10.26");
        // Another writer claims the name after it was picked
        fs::write(&path, "### Squat\n| 100 |\n").unwrap();

        let error = create_document_file(&path, &new_document_text(&Config::default()))
            .await
            .unwrap_err();
        assert!(error.to_string().contains("failed to create"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "### Squat\n| 100 |\n");
    }

    #[test]
    fn test_new_document_text_follows_config() {
        let mut config = Config::default();
        config.new_file.title = String::new();
        config.new_file.exercise_name = "Squat".to_string();
        config.exercise.header = vec!["Weight".into(), "Reps".into(), "RPE".into()];

        let text = new_document_text(&config);
        assert_eq!(
            text,
            "### Squat\n| Weight | Reps | RPE |\n| --- | --- | --- |\n|  |  |  |\n"
        );
    }
}
