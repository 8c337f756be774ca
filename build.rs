use shadow_rs::{BuildPattern, ShadowBuilder};
use std::process::Command;

fn main() -> shadow_rs::SdResult<()> {
    ShadowBuilder::builder().build_pattern(BuildPattern::RealTime).build()?;

    // Subject line of the commit the binary was built from
    if let Ok(output) = Command::new("git").args(["log", "-1", "--pretty=%s"]).output()
        && output.status.success()
        && let Ok(subject) = String::from_utf8(output.stdout)
    {
        println!("cargo:rustc-env=TOOLSAPP_COMMIT_SUBJECT={}", subject.trim());
    }

    Ok(())
}
