use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) items_file: Option<SettingSource>,
	pub(crate) unique_key: Option<SettingSource>,
	pub(crate) display_key: Option<SettingSource>,
	pub(crate) filter_method: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) log_level: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_items_file(&self) -> SettingSource {
		or_key(&self.items_file, "items.file")
	}

	pub(crate) fn source_for_unique_key(&self) -> SettingSource {
		or_key(&self.unique_key, "items.unique_key")
	}

	pub(crate) fn source_for_display_key(&self) -> SettingSource {
		or_key(&self.display_key, "items.display_key")
	}

	pub(crate) fn source_for_filter_method(&self) -> SettingSource {
		or_key(&self.filter_method, "select.filter_method")
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		or_key(&self.theme, "ui.theme")
	}

	pub(crate) fn source_for_log_level(&self) -> SettingSource {
		or_key(&self.log_level, "ui.log_level")
	}
}

fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
	source.clone().unwrap_or(SettingSource::ConfigKey(key))
}
