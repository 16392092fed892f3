//! Cover art URLs.

const OPEN_LIBRARY_COVERS: &str = "https://covers.openlibrary.org/b";

/// Primary cover URL for a book.
///
/// An ISBN of at least 10 characters wins over the title. Returns an empty
/// string when neither is usable.
pub fn resolve(isbn: Option<&str>, title: Option<&str>) -> String {
    match (usable_isbn(isbn), usable_title(title)) {
        (Some(isbn), _) => open_library_isbn(isbn),
        (None, Some(title)) => open_library_title(title),
        (None, None) => String::new(),
    }
}

/// A step in the degrade sequence a renderer walks when a cover fails to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverSource {
    Url(String),
    /// Generic book icon; always the last entry
    Placeholder,
}

/// Sources to try, in order, after the URL from [`resolve`] fails to load:
/// Google Books by ISBN, OpenLibrary by title, an Amazon image guess, then
/// the placeholder. Entries whose input is missing are skipped.
pub fn fallback_chain(isbn: Option<&str>, title: Option<&str>) -> Vec<CoverSource> {
    let isbn = isbn.map(str::trim).filter(|i| !i.is_empty());
    let title = usable_title(title);
    let mut chain = Vec::with_capacity(4);

    if let Some(isbn) = isbn {
        chain.push(CoverSource::Url(format!(
            "https://books.google.com/books/content?id=ISBN:{}&printsec=frontcover&img=1&zoom=1&source=gbs_api",
            isbn
        )));
    }

    if let Some(title) = title {
        chain.push(CoverSource::Url(open_library_title(title)));
    }

    let amazon_id = isbn
        .map(str::to_string)
        .or_else(|| title.map(|t| urlencoding::encode(t).into_owned()));
    if let Some(id) = amazon_id {
        chain.push(CoverSource::Url(format!(
            "https://images-na.ssl-images-amazon.com/images/P/{}.01._SX450_SY635_SCLZZZZZZZ_.jpg",
            id
        )));
    }

    chain.push(CoverSource::Placeholder);
    chain
}

fn usable_isbn(isbn: Option<&str>) -> Option<&str> {
    isbn.map(str::trim).filter(|i| i.len() >= 10)
}

fn usable_title(title: Option<&str>) -> Option<&str> {
    title.map(str::trim).filter(|t| !t.is_empty())
}

fn open_library_isbn(isbn: &str) -> String {
    format!("{}/isbn/{}-L.jpg", OPEN_LIBRARY_COVERS, isbn)
}

fn open_library_title(title: &str) -> String {
    format!(
        "{}/title/{}-L.jpg",
        OPEN_LIBRARY_COVERS,
        urlencoding::encode(title)
    )
}
