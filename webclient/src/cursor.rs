use serde::{Deserialize, Serialize};
use url::Url;

use crate::urls;

/// One page of a cursor-paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self { items, next_cursor }
    }

    pub fn is_last(&self) -> bool {
        self.next_cursor.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Extracts the `cursor` query parameter from a `next` link.
///
/// `next` may be absolute or relative to the API base.
/// Returns `None` (terminal page) when there is no link, the link does not parse,
/// or it carries no non-empty `cursor` parameter.
pub fn extract_cursor(next: Option<&str>) -> Option<String> {
    let next = next?.trim();
    if next.is_empty() {
        return None;
    }

    let url = match Url::parse(next) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => match urls::BASE_URL.join(next) {
            Ok(url) => url,
            Err(e) => {
                log::warn!("Ignoring unparsable next link '{}': {}", next, e);
                return None;
            }
        },
        Err(e) => {
            log::warn!("Ignoring unparsable next link '{}': {}", next, e);
            return None;
        }
    };

    url.query_pairs()
        .find(|(key, _)| key == "cursor")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn extract_cursor_from_absolute_link() {
        let next = "https://acm.sjtu.edu.cn/OnlineJudge/api/v1/course/?cursor=42";
        assert_eq!(extract_cursor(Some(next)).as_deref(), Some("42"));

        // Other parameters are kept out of the way:
        let next = "https://acm.sjtu.edu.cn/OnlineJudge/api/v1/submission/?username=alice&cursor=abc%3D&lang=cpp";
        assert_eq!(extract_cursor(Some(next)).as_deref(), Some("abc="));
    }

    #[test]
    fn extract_cursor_from_relative_link() {
        assert_eq!(
            extract_cursor(Some("/OnlineJudge/api/v1/problem/?cursor=7")).as_deref(),
            Some("7")
        );
        assert_eq!(extract_cursor(Some("?cursor=9")).as_deref(), Some("9"));
        assert_eq!(
            extract_cursor(Some(".../endpoint?cursor=42")).as_deref(),
            Some("42")
        );
    }

    #[test]
    fn terminal_when_no_cursor() {
        assert_eq!(extract_cursor(None), None);
        assert_eq!(extract_cursor(Some("")), None);
        assert_eq!(
            extract_cursor(Some("https://acm.sjtu.edu.cn/OnlineJudge/api/v1/course/")),
            None
        );
        assert_eq!(extract_cursor(Some("/course/?keyword=abc")), None);
        assert_eq!(extract_cursor(Some("/course/?cursor=")), None);
    }

    #[test]
    fn page_helpers() {
        let page = Page::new(vec![1, 2, 3], None);
        assert!(page.is_last());
        assert!(!page.is_empty());
        assert_eq!(page.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);

        let page: Page<u8> = Page::new(vec![], Some("5".to_owned()));
        assert!(!page.is_last());
        assert!(page.is_empty());
    }
}
