use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::{
    Border, Font, FormatVersion, Image, L10n, Ref, ResourceError, Result, Theme, ThemeBorder,
    ThemeFont, ThemeValue,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Image,
    Font,
    Theme,
    Data,
    L10n,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResourceKind::Image => "image",
            ResourceKind::Font => "font",
            ResourceKind::Theme => "theme",
            ResourceKind::Data => "data",
            ResourceKind::L10n => "l10n",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    Image(Rc<Image>),
    Font(Rc<Font>),
    /// As decoded; may still hold pending references.
    Theme(Theme),
    Data(Vec<u8>),
    L10n(L10n),
}

impl Resource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Image(_) => ResourceKind::Image,
            Resource::Font(_) => ResourceKind::Font,
            Resource::Theme(_) => ResourceKind::Theme,
            Resource::Data(_) => ResourceKind::Data,
            Resource::L10n(_) => ResourceKind::L10n,
        }
    }
}

/// Every resource of one bundle, by unique name, in stream order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceTable {
    version: FormatVersion,
    metadata: Vec<String>,
    resources: IndexMap<String, Resource>,
}

impl ResourceTable {
    pub fn new(version: FormatVersion) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }

    pub fn version(&self) -> FormatVersion {
        self.version
    }

    pub(crate) fn set_version(&mut self, version: FormatVersion) {
        self.version = version;
    }

    pub fn metadata(&self) -> &[String] {
        &self.metadata
    }

    pub fn set_metadata(&mut self, metadata: Vec<String>) {
        self.metadata = metadata;
    }

    /// Adds a resource, replacing any previous one of the same name.
    pub fn insert(&mut self, name: impl Into<String>, resource: Resource) -> Option<Resource> {
        self.resources.insert(name.into(), resource)
    }

    pub fn get(&self, name: &str) -> Option<(ResourceKind, &Resource)> {
        self.resources
            .get(name)
            .map(|resource| (resource.kind(), resource))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Resource)> {
        self.resources
            .iter()
            .map(|(name, resource)| (name.as_str(), resource))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    pub fn names_of(&self, kind: ResourceKind) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(move |(_, resource)| resource.kind() == kind)
            .map(|(name, _)| name)
    }

    pub fn image(&self, name: &str) -> Option<&Rc<Image>> {
        match self.resources.get(name)? {
            Resource::Image(image) => Some(image),
            _ => None,
        }
    }

    pub fn font(&self, name: &str) -> Option<&Rc<Font>> {
        match self.resources.get(name)? {
            Resource::Font(font) => Some(font),
            _ => None,
        }
    }

    pub fn data(&self, name: &str) -> Option<&[u8]> {
        match self.resources.get(name)? {
            Resource::Data(data) => Some(data),
            _ => None,
        }
    }

    pub fn l10n(&self, name: &str) -> Option<&L10n> {
        match self.resources.get(name)? {
            Resource::L10n(l10n) => Some(l10n),
            _ => None,
        }
    }

    /// The theme exactly as decoded, pending references included.
    pub fn raw_theme(&self, name: &str) -> Option<&Theme> {
        match self.resources.get(name)? {
            Resource::Theme(theme) => Some(theme),
            _ => None,
        }
    }

    /// A fully wired copy of the theme.
    ///
    /// Every pending image and font reference is looked up in this table;
    /// the first one that is missing fails with
    /// [`ResourceError::MissingResource`]. Failure only affects this call:
    /// the table and its other themes stay usable. For version 0.0 bundles
    /// the separately stored pressed and focused borders are folded into
    /// their base border.
    pub fn theme(&self, name: &str) -> Result<Theme> {
        let mut theme = self
            .raw_theme(name)
            .cloned()
            .ok_or_else(|| ResourceError::NoSuchTheme(name.to_owned()))?;
        if self.version.is_legacy() {
            merge_border_states(&mut theme);
        }
        for (key, value) in theme.entries_mut() {
            self.wire_value(name, key, value)?;
        }
        log::debug!("wired theme {name:?} ({} entries)", theme.len());
        Ok(theme)
    }

    fn wire_value(&self, theme: &str, key: &str, value: &mut ThemeValue) -> Result<()> {
        let missing = |reference: &str| ResourceError::MissingResource {
            theme: theme.to_owned(),
            key: key.to_owned(),
            name: reference.to_owned(),
        };
        match value {
            ThemeValue::Image(image) => resolve(image, |name| self.image(name), missing),
            ThemeValue::Font(ThemeFont::Named(font)) => {
                resolve(font, |name| self.font(name), missing)
            }
            ThemeValue::Border(border) => border
                .image_refs_mut()
                .try_for_each(|image| resolve(image, |name| self.image(name), &missing)),
            _ => Ok(()),
        }
    }
}

fn resolve<'t, T>(
    reference: &mut Ref<T>,
    lookup: impl Fn(&str) -> Option<&'t Rc<T>>,
    missing: impl Fn(&str) -> ResourceError,
) -> Result<()>
where
    T: 't,
{
    if let Ref::Pending(name) = reference {
        let value = lookup(name).ok_or_else(|| missing(name))?;
        *reference = Ref::Resolved {
            name: std::mem::take(name),
            value: Rc::clone(value),
        };
    }
    Ok(())
}

/// Folds `<key>Pressed` and `<key>Focused` border entries into `<key>`.
pub(crate) fn merge_border_states(theme: &mut Theme) {
    let keys: Vec<String> = theme
        .entries()
        .filter(|(key, value)| key.ends_with("order") && matches!(value, ThemeValue::Border(_)))
        .map(|(key, _)| key.to_owned())
        .collect();
    for key in keys {
        let pressed = take_border(theme, &format!("{key}Pressed"));
        let focused = take_border(theme, &format!("{key}Focused"));
        if let Some(ThemeValue::Border(border)) = theme.get(&key).cloned() {
            theme.insert(
                key,
                ThemeValue::Border(ThemeBorder {
                    pressed: pressed.or(border.pressed),
                    focused: focused.or(border.focused),
                    border: border.border,
                }),
            );
        }
    }
}

fn take_border(theme: &mut Theme, key: &str) -> Option<Border> {
    match theme.remove(key)? {
        ThemeValue::Border(border) => Some(border.border),
        other => {
            theme.insert(key, other);
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
