use firebase::settings::FirebaseSettings;

/// Load the Firebase configuration record
///
/// Every required key must be present; see `firebase::settings::REQUIRED_KEYS`.
pub fn init_firebase() -> anyhow::Result<FirebaseSettings> {
    let settings = FirebaseSettings::from_env()?;
    tracing::info!(
        project_id = %settings.project_id(),
        "Firebase configuration loaded"
    );
    Ok(settings)
}
