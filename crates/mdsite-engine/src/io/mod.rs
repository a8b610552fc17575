//! Filesystem side of site generation: static asset copying and turning a
//! tree of markdown files into a mirrored tree of HTML pages.

use crate::{
    html::RenderOptions,
    page::{PageError, Template, render_page},
};
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

pub const MARKDOWN_EXTENSION: &str = "md";
pub const HTML_EXTENSION: &str = "html";

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Directory not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Path {0} is not inside the content directory")]
    InvalidPath(PathBuf),
    #[error("Failed to generate page from {path}: {source}")]
    Page { path: PathBuf, source: PageError },
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Replaces `dest` with a recursive copy of `src`.
///
/// Returns the number of files copied.
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    validate_dir(src)?;
    if dest.exists() {
        log::debug!("Removing existing output directory {}", dest.display());
        fs::remove_dir_all(dest).map_err(io_error(dest))?;
    }
    copy_directory_recursive(src, dest)
}

fn copy_directory_recursive(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    fs::create_dir_all(dest).map_err(io_error(dest))?;

    let mut copied = 0;
    for entry in fs::read_dir(src).map_err(io_error(src))? {
        let entry = entry.map_err(io_error(src))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if from.is_dir() {
            copied += copy_directory_recursive(&from, &to)?;
        } else {
            log::debug!("Copying {} -> {}", from.display(), to.display());
            fs::copy(&from, &to).map_err(io_error(&from))?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Scan for markdown files under `root`, sorted.
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, SiteError> {
    validate_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SiteError> {
    let entries = fs::read_dir(dir).map_err(io_error(dir))?;

    for entry in entries {
        let entry = entry.map_err(io_error(dir))?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == MARKDOWN_EXTENSION
        {
            files.push(path);
        } else {
            log::debug!("Skipping non-markdown file {}", path.display());
        }
    }

    Ok(())
}

pub fn validate_dir(path: &Path) -> Result<(), SiteError> {
    if !path.is_dir() {
        return Err(SiteError::NotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Reads and validates a template file.
pub fn read_template(path: &Path) -> Result<Template, SiteError> {
    let source = fs::read_to_string(path).map_err(io_error(path))?;
    Template::new(source).map_err(|source| SiteError::Page {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders the markdown file `from` through `template` and writes it to
/// `dest`, creating parent directories as needed.
pub fn generate_page(
    from: &Path,
    template: &Template,
    dest: &Path,
    options: &RenderOptions,
) -> Result<(), SiteError> {
    log::info!("Generating page {} -> {}", from.display(), dest.display());

    let markdown = fs::read_to_string(from).map_err(io_error(from))?;
    let html = render_page(&markdown, template, options).map_err(|source| SiteError::Page {
        path: from.to_path_buf(),
        source,
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(dest, html).map_err(io_error(dest))
}

/// Where the page for `file` lands: its path relative to `content_root`,
/// under `output_root`, with an `.html` extension.
pub fn output_path_for(
    file: &Path,
    content_root: &Path,
    output_root: &Path,
) -> Result<PathBuf, SiteError> {
    let relative = file
        .strip_prefix(content_root)
        .ok()
        .and_then(|rel| RelativePathBuf::from_path(rel).ok())
        .ok_or_else(|| SiteError::InvalidPath(file.to_path_buf()))?;
    Ok(relative.with_extension(HTML_EXTENSION).to_path(output_root))
}

/// Generates a page for every markdown file under `content_root`.
///
/// Returns the written paths in file order. The first failing page aborts
/// the run.
pub fn generate_site(
    content_root: &Path,
    template_path: &Path,
    output_root: &Path,
    options: &RenderOptions,
) -> Result<Vec<PathBuf>, SiteError> {
    let template = read_template(template_path)?;

    scan_markdown_files(content_root)?
        .into_iter()
        .map(|file| {
            let dest = output_path_for(&file, content_root, output_root)?;
            generate_page(&file, &template, &dest, options)?;
            Ok(dest)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file, read_to_string};
    use pretty_assertions::assert_eq;

    const TEMPLATE: &str = "<title>{{ Title }}</title><main>{{ Content }}</main>";

    #[test]
    fn test_scan_nested_directories() {
        let content = create_test_dir();
        create_test_file(&content, "index.md", "# Root file");
        create_test_file(&content, "blog/post.md", "# Nested file");
        create_test_file(&content, "images/logo.png", "fake image data");

        let files = scan_markdown_files(content.path()).unwrap();

        assert_eq!(
            files,
            vec![
                content.path().join("blog/post.md"),
                content.path().join("index.md"),
            ]
        );
    }

    #[test]
    fn test_scan_missing_directory() {
        let result = scan_markdown_files(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(SiteError::NotFound(_))));
    }

    #[test]
    fn test_copy_static_replaces_destination() {
        let src = create_test_dir();
        create_test_file(&src, "index.css", "body {}");
        create_test_file(&src, "images/tolkien.png", "png");
        let dest = create_test_dir();
        let stale = create_test_file(&dest, "stale.html", "old");

        let copied = copy_static(src.path(), dest.path()).unwrap();

        assert_eq!(copied, 2);
        assert!(!stale.exists());
        assert_eq!(read_to_string(&dest.path().join("index.css")), "body {}");
        assert_eq!(
            read_to_string(&dest.path().join("images/tolkien.png")),
            "png"
        );
    }

    #[test]
    fn test_output_path_mirrors_content_tree() {
        let dest = output_path_for(
            Path::new("/site/content/blog/post.md"),
            Path::new("/site/content"),
            Path::new("/site/public"),
        )
        .unwrap();
        assert_eq!(dest, PathBuf::from("/site/public/blog/post.html"));
    }

    #[test]
    fn test_output_path_outside_content_root() {
        let result = output_path_for(
            Path::new("/elsewhere/post.md"),
            Path::new("/site/content"),
            Path::new("/site/public"),
        );
        assert!(matches!(result, Err(SiteError::InvalidPath(_))));
    }

    #[test]
    fn test_generate_site() {
        let site = create_test_dir();
        create_test_file(&site, "content/index.md", "# Home\n\nWelcome **home**");
        create_test_file(&site, "content/blog/first.md", "# First\n\n- one\n- two");
        let template = create_test_file(&site, "template.html", TEMPLATE);
        let output = site.path().join("public");

        let written = generate_site(
            &site.path().join("content"),
            &template,
            &output,
            &RenderOptions::default(),
        )
        .unwrap();

        assert_eq!(
            written,
            vec![output.join("blog/first.html"), output.join("index.html")]
        );
        assert_eq!(
            read_to_string(&output.join("index.html")),
            "<title>Home</title><main><div><h1>Home</h1><p>Welcome <b>home</b></p></div></main>"
        );
        assert_eq!(
            read_to_string(&output.join("blog/first.html")),
            "<title>First</title><main><div><h1>First</h1><ul><li>one</li><li>two</li></ul></div></main>"
        );
    }

    #[test]
    fn test_generate_site_reports_failing_page() {
        let site = create_test_dir();
        let bad = create_test_file(&site, "content/bad.md", "# Bad\n\nunclosed *italic");
        let template = create_test_file(&site, "template.html", TEMPLATE);

        let err = generate_site(
            &site.path().join("content"),
            &template,
            &site.path().join("public"),
            &RenderOptions::default(),
        )
        .unwrap_err();

        match err {
            SiteError::Page { path, .. } => assert_eq!(path, bad),
            other => panic!("expected page error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_template_without_content_placeholder() {
        let site = create_test_dir();
        let template = create_test_file(&site, "template.html", "<title>{{ Title }}</title>");

        let result = read_template(&template);
        assert!(matches!(
            result,
            Err(SiteError::Page {
                source: PageError::MissingPlaceholder(_),
                ..
            })
        ));
    }
}
