//! Theme variants and theme-resolved icon assets.
//!
//! Icon selection is a pure function of `(method key, theme)` so descriptor construction can be
//! tested without any theme machinery. Undetermined themes fall back to the light asset.

// self
use crate::{_prelude::*, registry};

/// Presentation theme observed by the settings screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
	/// Light presentation.
	Light,
	/// Dark presentation.
	Dark,
	/// Theme detection has not settled yet (loading, system preference unknown).
	#[default]
	Undetermined,
}
impl Theme {
	/// Maps a resolved theme name; unknown or missing values are undetermined.
	pub fn from_resolved(value: Option<&str>) -> Self {
		value.and_then(|value| value.parse().ok()).unwrap_or(Theme::Undetermined)
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Theme::Light => "light",
			Theme::Dark => "dark",
			Theme::Undetermined => "undetermined",
		}
	}
}
impl Display for Theme {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Theme {
	type Err = ThemeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"light" => Ok(Theme::Light),
			"dark" => Ok(Theme::Dark),
			"undetermined" => Ok(Theme::Undetermined),
			other => Err(ThemeError::Unrecognized { value: other.to_owned() }),
		}
	}
}

/// Errors raised while resolving the active theme.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ThemeError {
	/// Theme source is gone or has not been wired up.
	#[error("Theme source is unavailable.")]
	Unavailable,
	/// Theme name is not one of the supported variants.
	#[error("Unrecognized theme `{value}`.")]
	Unrecognized {
		/// Raw theme name.
		value: String,
	},
}

/// Reference to a renderable icon asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct IconRef {
	/// Asset path or symbolic icon name.
	pub asset: &'static str,
	/// Alternate text.
	pub alt: &'static str,
	/// Rendered edge length in pixels.
	pub size: u16,
}
impl IconRef {
	const DEFAULT_SIZE: u16 = 22;

	/// Creates an icon with the default card size.
	pub const fn new(asset: &'static str, alt: &'static str) -> Self {
		Self { asset, alt, size: Self::DEFAULT_SIZE }
	}
}

/// Light and optional dark variants of one icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconSet {
	/// Default variant, also used while the theme is undetermined.
	pub light: IconRef,
	/// Dark variant; `None` means the light asset works on both backgrounds.
	pub dark: Option<IconRef>,
}
impl IconSet {
	/// Icon set whose single asset is theme-independent.
	pub const fn single(icon: IconRef) -> Self {
		Self { light: icon, dark: None }
	}

	/// Icon set with a dedicated dark variant.
	pub const fn themed(light: IconRef, dark: IconRef) -> Self {
		Self { light, dark: Some(dark) }
	}

	/// Picks the variant for the provided theme.
	pub fn resolve(&self, theme: Theme) -> IconRef {
		match (theme, self.dark) {
			(Theme::Dark, Some(dark)) => dark,
			_ => self.light,
		}
	}
}

/// Generic icon used for methods without a catalogued asset.
pub const FALLBACK_ICONS: IconSet = IconSet::single(IconRef::new("lucide:lock-keyhole", "Lock"));

/// Resolves the icon for a method key under the provided theme.
///
/// Keys missing from the built-in tables resolve to [`FALLBACK_ICONS`], so the result is never
/// empty.
pub fn icon_for(key: &str, theme: Theme) -> IconRef {
	registry::find_entry(key).map(|entry| entry.icons).unwrap_or(FALLBACK_ICONS).resolve(theme)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn theme_parses_resolved_names() {
		assert_eq!(Theme::from_resolved(Some("dark")), Theme::Dark);
		assert_eq!(Theme::from_resolved(Some("light")), Theme::Light);
		assert_eq!(Theme::from_resolved(Some("system")), Theme::Undetermined);
		assert_eq!(Theme::from_resolved(None), Theme::Undetermined);
		assert_eq!(
			"sepia".parse::<Theme>(),
			Err(ThemeError::Unrecognized { value: "sepia".into() })
		);
	}

	#[test]
	fn dark_variant_only_for_dark_theme() {
		let set = IconSet::themed(IconRef::new("light.svg", "L"), IconRef::new("dark.svg", "D"));

		assert_eq!(set.resolve(Theme::Dark).asset, "dark.svg");
		assert_eq!(set.resolve(Theme::Light).asset, "light.svg");
		assert_eq!(set.resolve(Theme::Undetermined).asset, "light.svg");
	}

	#[test]
	fn icon_for_selects_github_variant_by_theme() {
		assert_eq!(icon_for("github", Theme::Dark).asset, "/logos/github-dark-mode.svg");
		assert_eq!(icon_for("github", Theme::Undetermined).asset, "/logos/github-light-mode.svg");
		assert_eq!(icon_for("saml", Theme::Dark).asset, "/logos/saml-logo.svg");
	}

	#[test]
	fn icon_for_unknown_key_falls_back() {
		assert_eq!(icon_for("kerberos", Theme::Dark), FALLBACK_ICONS.light);
	}
}
