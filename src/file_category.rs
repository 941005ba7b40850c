/// Extension-based categorization of desktop files.
///
/// A [`CategoryTable`] is an ordered list of named buckets, each holding a set of
/// file extensions. Lookups scan the table in declaration order and the first
/// category listing the extension wins, so an extension shared by two
/// categories always lands in the one declared first.
///
/// # Examples
///
/// ```
/// use desktop_cleaner::file_category::CategoryTable;
///
/// let table = CategoryTable::default();
/// assert_eq!(table.category_for_extension(".py").map(|c| c.name()), Some("CODE"));
/// assert_eq!(table.category_for_extension(".PNG").map(|c| c.name()), Some("PICS"));
/// assert!(table.category_for_extension(".xyz").is_none());
/// ```
use std::path::Path;

/// A named bucket of file extensions.
///
/// The name doubles as the destination folder created under the desktop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    extensions: Vec<String>,
}

impl Category {
    /// Creates a category from a name and a list of extensions.
    ///
    /// Extensions are normalized to lowercase and given a leading dot if it
    /// is missing, so `"PNG"` and `".png"` are stored the same way.
    pub fn new<N, I, S>(name: N, extensions: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for ext in extensions {
            let ext = normalize_extension(ext.as_ref());
            if !ext.is_empty() && !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }

        Self {
            name: name.into(),
            extensions: normalized,
        }
    }

    /// Returns the category name, which is also its folder name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the normalized extensions routed to this category.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Returns true if this category lists the given extension.
    ///
    /// The comparison ignores case and accepts the extension with or without
    /// its leading dot.
    pub fn contains(&self, ext: &str) -> bool {
        let ext = normalize_extension(ext);
        self.extensions.iter().any(|known| *known == ext)
    }
}

/// An ordered, immutable-per-run mapping from category to extensions.
///
/// Declaration order is lookup order. The default table is the full desktop
/// set; tests and embedders can build their own with [`CategoryTable::new`]
/// and [`CategoryTable::with_category`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    /// Creates an empty table. Nothing matches until categories are added.
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    /// Appends a category and returns the table, for chained construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use desktop_cleaner::file_category::CategoryTable;
    ///
    /// let table = CategoryTable::new()
    ///     .with_category("NOTES", [".md", ".txt"])
    ///     .with_category("MARKUP", [".md", ".json"]);
    ///
    /// assert_eq!(table.category_for_extension(".md").map(|c| c.name()), Some("NOTES"));
    /// ```
    pub fn with_category<N, I, S>(mut self, name: N, extensions: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.push(Category::new(name, extensions));
        self
    }

    /// Appends a category at the end of the lookup order.
    pub fn push(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// Iterates over categories in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Returns the category names in lookup order.
    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(Category::name).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Maps an extension to the first category that lists it.
    ///
    /// # Examples
    ///
    /// ```
    /// use desktop_cleaner::file_category::CategoryTable;
    ///
    /// let table = CategoryTable::default();
    /// assert_eq!(table.category_for_extension(".pdf").map(|c| c.name()), Some("PDFS"));
    /// assert_eq!(table.category_for_extension("Mp3").map(|c| c.name()), Some("MUSIC"));
    /// ```
    pub fn category_for_extension(&self, ext: &str) -> Option<&Category> {
        if normalize_extension(ext).is_empty() {
            return None;
        }
        self.categories.iter().find(|category| category.contains(ext))
    }

    /// Determines the category for a file from its name.
    ///
    /// Returns `None` when the file has no extension or the extension is not
    /// listed by any category.
    pub fn categorize(&self, path: &Path) -> Option<&Category> {
        let ext = extension_of(path)?;
        self.category_for_extension(&ext)
    }

    /// Populates the table with the standard desktop categories.
    fn populate_standard_categories(&mut self) {
        // MARKUP precedes NOTES, so ".md" is filed as markup.
        self.push(Category::new(
            "CODE",
            [
                ".c", ".h", ".py", ".rs", ".go", ".js", ".ts", ".jsx", ".tsx", ".html", ".css",
                ".php", ".java", ".cpp", ".cs", ".vb", ".sql", ".pl", ".swift", ".kt", ".r",
                ".m", ".asm",
            ],
        ));
        self.push(Category::new(
            "MARKUP",
            [
                ".json", ".xml", ".yml", ".yaml", ".ini", ".toml", ".cfg", ".conf", ".log", ".md",
            ],
        ));
        self.push(Category::new("NOTES", [".md", ".rtf", ".txt"]));
        self.push(Category::new(
            "DOCS",
            [".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx"],
        ));
        self.push(Category::new("EXE", [".exe", ".appimage", ".msi"]));
        self.push(Category::new("VIDS", [".mp4", ".mov", ".avi", ".mkv"]));
        self.push(Category::new(
            "COMPRESSED",
            [".zip", ".rar", ".tar", ".gz", ".7z"],
        ));
        self.push(Category::new("SCRIPTS", [".sh", ".bat"]));
        self.push(Category::new("INSTALLERS", [".deb", ".rpm"]));
        self.push(Category::new("BOOKS", [".epub", ".mobi"]));
        self.push(Category::new("MUSIC", [".mp3", ".wav", ".ogg", ".flac"]));
        self.push(Category::new("PDFS", [".pdf"]));
        self.push(Category::new(
            "PICS",
            [".bmp", ".gif", ".jpg", ".jpeg", ".svg", ".png"],
        ));
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        let mut table = Self::new();
        table.populate_standard_categories();
        table
    }
}

/// Extracts the normalized extension of a path's file name.
///
/// The extension is the text after the final `.`, lowercased and returned with
/// its leading dot. Dotfiles such as `.bashrc` and names ending in a dot have
/// no extension.
///
/// # Examples
///
/// ```
/// use desktop_cleaner::file_category::extension_of;
/// use std::path::Path;
///
/// assert_eq!(extension_of(Path::new("Report.PDF")).as_deref(), Some(".pdf"));
/// assert_eq!(extension_of(Path::new("backup.tar.gz")).as_deref(), Some(".gz"));
/// assert_eq!(extension_of(Path::new(".bashrc")), None);
/// assert_eq!(extension_of(Path::new("README")), None);
/// ```
pub fn extension_of(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_string_lossy();
    if ext.is_empty() {
        return None;
    }
    Some(format!(".{}", ext.to_lowercase()))
}

fn normalize_extension(ext: &str) -> String {
    let trimmed = ext.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return String::new();
    }
    format!(".{}", trimmed.to_lowercase())
}
