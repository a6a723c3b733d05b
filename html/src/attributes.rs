use std::collections::HashMap;
use std::fmt::{self, Display, Write};

/// Attribute name to value mapping of an element. Insertion order is not
/// kept; rendering always emits names in ascending order.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Attributes(HashMap<String, String>);

impl Attributes {
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries sorted by name
    fn sorted(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .0
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Renders the set as ` name="value"` pairs, sorted by name. Values are
    /// emitted verbatim.
    pub fn render(&self) -> Result<String, fmt::Error> {
        let mut html = String::new();
        for (name, value) in self.sorted() {
            write!(html, " {}=\"{}\"", name, value)?;
        }
        Ok(html)
    }
}

impl Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, (name, value)) in self.sorted().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        f.write_char('}')
    }
}

impl From<HashMap<String, String>> for Attributes {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
#[test]
fn test_render_attributes() {
    assert_eq!(Attributes::empty().render(), Ok(String::new()));

    let attributes = Attributes::from_iter([("href", "https://google.com")]);
    assert_eq!(attributes.render(), Ok(r#" href="https://google.com""#.to_string()));

    let attributes = Attributes::from_iter([("href", "https://google.com"), ("class", "first")]);
    assert_eq!(
        attributes.render(),
        Ok(r#" class="first" href="https://google.com""#.to_string())
    );
}

#[cfg(test)]
#[test]
fn test_render_ignores_insertion_order() {
    let forward = Attributes::from_iter([("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")]);
    let backward = Attributes::from_iter([("d", "4"), ("c", "3"), ("b", "2"), ("a", "1")]);
    assert_eq!(forward, backward);
    assert_eq!(forward.render(), backward.render());
    assert_eq!(forward.render(), Ok(r#" a="1" b="2" c="3" d="4""#.to_string()));
}

#[cfg(test)]
#[test]
fn test_values_are_not_escaped() {
    let attributes = Attributes::from_iter([("title", r#"<b>"&"</b>"#)]);
    assert_eq!(attributes.render(), Ok(r#" title="<b>"&"</b>""#.to_string()));
}

#[cfg(test)]
#[test]
fn test_display_attributes() {
    assert_eq!(Attributes::empty().to_string(), "{}");
    let attributes = Attributes::from_iter([("id", "prop"), ("class", "parent")]);
    assert_eq!(attributes.to_string(), "{class: parent, id: prop}");
}
