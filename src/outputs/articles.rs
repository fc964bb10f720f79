//! One text file per article.
//!
//! # Output Structure
//!
//! ```text
//! base_dir/
//! └── falso/
//!     ├── colombiaCheck_001.txt
//!     ├── colombiaCheck_002.txt
//!     └── colombiaCheck_003.txt
//! ```
//!
//! Files are numbered by position in the run, starting at 001, and
//! overwritten if they already exist.

use crate::error::Result;
use crate::models::{Article, Label};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// File name for the article at 1-based `position`.
pub fn article_filename(portal: &str, position: usize) -> String {
    format!("{portal}_{position:03}.txt")
}

/// Render the body of an article file.
pub fn render_article(article: &Article, portal: &str) -> String {
    format!(
        "Fuente: {}\nURL: {}\nTítulo: {}\n\nDescripción: {}\n",
        portal, article.url, article.title, article.description
    )
}

/// Write every article to `<base_dir>/<label>/<portal>_NNN.txt`.
///
/// Returns the directory the files were written to. Not transactional: an
/// error part-way through leaves the files written so far.
#[instrument(level = "info", skip_all, fields(base_dir = %base_dir.display(), %label, %portal))]
pub async fn save_articles(
    articles: &[Article],
    label: Label,
    portal: &str,
    base_dir: &Path,
) -> Result<PathBuf> {
    let save_path = base_dir.join(label.as_str());
    if let Err(e) = fs::create_dir_all(&save_path).await {
        error!(path = %save_path.display(), error = %e, "Failed to create article dir");
        return Err(e.into());
    }

    for (idx, article) in articles.iter().enumerate() {
        let filepath = save_path.join(article_filename(portal, idx + 1));
        fs::write(&filepath, render_article(article, portal)).await?;
    }

    info!(count = articles.len(), path = %save_path.display(), "Saved article files");
    Ok(save_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn article(n: usize) -> Article {
        Article {
            title: format!("Titulo {n}"),
            description: format!("Descripcion {n}"),
            url: format!("https://colombiacheck.com/chequeos/{n}"),
        }
    }

    #[test]
    fn test_article_filename_is_zero_padded() {
        assert_eq!(article_filename("colombiaCheck", 1), "colombiaCheck_001.txt");
        assert_eq!(article_filename("colombiaCheck", 42), "colombiaCheck_042.txt");
        assert_eq!(article_filename("p", 1000), "p_1000.txt");
    }

    #[test]
    fn test_render_article_layout() {
        let body = render_article(&article(7), "colombiaCheck");
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Fuente: colombiaCheck",
                "URL: https://colombiacheck.com/chequeos/7",
                "Título: Titulo 7",
                "",
                "Descripción: Descripcion 7",
            ]
        );
    }

    #[tokio::test]
    async fn test_save_articles_numbers_in_order() {
        let tmp = TempDir::new().unwrap();
        let articles = vec![article(1), article(2), article(3)];

        let dir = save_articles(&articles, Label::Falso, "colombiaCheck", tmp.path())
            .await
            .unwrap();

        assert_eq!(dir, tmp.path().join("falso"));
        for (i, name) in ["colombiaCheck_001.txt", "colombiaCheck_002.txt", "colombiaCheck_003.txt"]
            .iter()
            .enumerate()
        {
            let content = std::fs::read_to_string(dir.join(name)).unwrap();
            assert!(content.contains(&articles[i].url));
        }
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 3);
    }

    #[tokio::test]
    async fn test_save_articles_overwrites_existing() {
        let tmp = TempDir::new().unwrap();
        save_articles(&[article(1)], Label::Verdad, "p", tmp.path())
            .await
            .unwrap();
        save_articles(&[article(9)], Label::Verdad, "p", tmp.path())
            .await
            .unwrap();

        let content = std::fs::read_to_string(tmp.path().join("verdad").join("p_001.txt")).unwrap();
        assert!(content.contains("Titulo 9"));
        assert!(!content.contains("Titulo 1\n"));
    }

    #[tokio::test]
    async fn test_save_no_articles_creates_empty_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = save_articles(&[], Label::Falso, "p", tmp.path()).await.unwrap();
        assert!(dir.is_dir());
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
    }
}
