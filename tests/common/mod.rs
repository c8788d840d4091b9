//! Common test utilities for Frontpage integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A sample content document in the shape the CMS writes
#[allow(dead_code)]
pub const HOME_MD: &str = r#"---
# Landing page content
hero:
  title: "Apprends à coder: en t'amusant"
  subtitle: "Ateliers pour les 8-14 ans"
  button_text: 'Je m''inscris'
about:
  presentation: |
    Un atelier chaque semaine
    en petits groupes.
  vision: Rendre le code accessible
benefits:
  - Logique
  - "Créativité"
  - Confiance en soi
program_beginners_path:
  - Scratch
  - Robots
program_advanced_path:
  - Python
organization:
  schedule: |
    Mercredi 14h
    Samedi 10h
  location: Médiathèque
---
Texte libre du document.
"#;

/// A temporary site directory for integration tests
pub struct TestSite {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to site root
    pub path: PathBuf,
}

impl TestSite {
    /// Create a new empty site
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the site
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write the content document at the default location
    #[allow(dead_code)]
    pub fn write_home(&self, content: &str) {
        self.write_file("public/content/pages/home.md", content);
    }

    /// Read a file from the site
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the site
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

/// Command for the frontpage binary, run inside `site`
#[allow(deprecated)]
pub fn frontpage_cmd(site: &TestSite) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("frontpage").expect("binary is built");
    cmd.current_dir(&site.path)
        .env_remove("FRONTPAGE_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}
