use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct Settings {
    inner: FxHashMap<Setting, bool>,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            inner: FxHashMap::default(),
        }
    }

    pub fn enable(&mut self, setting: Setting) {
        self.inner.insert(setting, true);
    }

    pub fn disable(&mut self, setting: Setting) {
        self.inner.insert(setting, false);
    }

    pub fn with(mut self, setting: Setting) -> Self {
        self.enable(setting);
        self
    }

    pub fn is_enabled(&self, setting: &Setting) -> bool {
        match self.inner.get(setting) {
            Some(v) => *v,
            _ => false,
        }
    }

    pub fn as_vec(&self) -> Vec<(Setting, bool)> {
        let mut settings = self
            .inner
            .iter()
            .map(|p| (p.0.clone(), *p.1))
            .collect::<Vec<_>>();

        settings.sort_by_key(|(s, _)| s.to_string());
        settings
    }
}

impl Default for Settings {
    fn default() -> Settings {
        let mut settings = Settings::new();

        settings.disable(Setting::LastDeclarationWins);
        settings.disable(Setting::LenientReceiverLink);
        settings.disable(Setting::RetainOnFailure);

        settings
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Setting {
    /// A later declaration shadows an earlier one with the same name.
    LastDeclarationWins,
    /// A unit without a receiver link field is treated as having no receiver yet.
    LenientReceiverLink,
    /// Keep the previous registries when a rebuild fails.
    RetainOnFailure,
}

impl std::fmt::Display for Setting {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        let name = match self {
            Setting::LastDeclarationWins => "last-declaration-wins",
            Setting::LenientReceiverLink => "lenient-receiver-link",
            Setting::RetainOnFailure => "retain-on-failure",
        };

        fmt.write_str(name)
    }
}
