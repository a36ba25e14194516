use plab_config::ENV_PREFIX;

const SECTIONS: [&str; 3] = ["API", "WIZARD", "PROGRESS"];

/// Emit warnings for env vars that look like config overrides but use a
/// single underscore, so figment never maps them.
pub fn warn_misnamed_env() {
    for warning in collect_misnamed_env_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_misnamed_env_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut keys = env
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| is_misnamed(key))
        .collect::<Vec<_>>();
    keys.sort();

    keys.into_iter()
        .map(|key| {
            let suggestion = suggest(&key);
            format!("{key} is ignored. Use double underscores to nest (example: {suggestion}).")
        })
        .collect()
}

fn is_misnamed(key: &str) -> bool {
    let Some(rest) = key.strip_prefix(ENV_PREFIX) else {
        return false;
    };
    SECTIONS.iter().any(|section| {
        rest.strip_prefix(section)
            .is_some_and(|tail| tail.starts_with('_') && !tail.starts_with("__"))
    })
}

fn suggest(key: &str) -> String {
    let rest = &key[ENV_PREFIX.len()..];
    match rest.split_once('_') {
        Some((section, field)) => format!("{ENV_PREFIX}{section}__{field}"),
        None => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::collect_misnamed_env_warnings;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "x".to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_section_keys() {
        let warnings = collect_misnamed_env_warnings(env(&[
            "PLAB_API_BASE_URL",
            "PLAB_WIZARD_PROCESSING_DELAY_MS",
        ]));

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("PLAB_API__BASE_URL"));
        assert!(warnings[1].contains("PLAB_WIZARD__PROCESSING_DELAY_MS"));
    }

    #[test]
    fn ignores_correct_and_unrelated_keys() {
        let warnings = collect_misnamed_env_warnings(env(&[
            "PLAB_API__BASE_URL",
            "PLAB_PROGRESS__CAP_PERCENT",
            "PLAB_LOG",
            "PLABBY_API_URL",
            "HOME",
        ]));

        assert!(warnings.is_empty());
    }
}
