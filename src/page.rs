/// Which page the session shows. Resolved once when the session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Not resolved yet.
    #[default]
    Init,
    Home,
    NotFound,
}

/// Maps the navigated path to a page. Only the root serves the form.
pub fn resolve(path: &str) -> Page {
    let path = path.split(['?', '#']).next().unwrap_or_default().trim();
    match path.trim_end_matches('/') {
        "" => Page::Home,
        _ => Page::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_home() {
        assert_eq!(resolve("/"), Page::Home);
        assert_eq!(resolve(""), Page::Home);
        assert_eq!(resolve("/?ref=mail"), Page::Home);
    }

    #[test]
    fn anything_else_is_not_found() {
        assert_eq!(resolve("/404"), Page::NotFound);
        assert_eq!(resolve("/go/abc"), Page::NotFound);
        assert_eq!(resolve("/static/x.js"), Page::NotFound);
    }
}
