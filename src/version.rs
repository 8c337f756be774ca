use crate::build;

/// Long version string shown by `--version`.
pub fn long_version() -> String {
    #[allow(clippy::const_is_empty)]
    let branch = if build::BRANCH.is_empty() { "detached" } else { build::BRANCH };
    let state = if build::GIT_CLEAN { "clean" } else { "dirty" };
    let subject = option_env!("TOOLSAPP_COMMIT_SUBJECT").unwrap_or("no commit message");

    format!(
        "{} ({branch} {} {state}: {subject})
Built {} for {} on {}
{}",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BUILD_TIME,
        build::BUILD_TARGET,
        build::BUILD_OS,
        build::RUST_VERSION,
    )
}
