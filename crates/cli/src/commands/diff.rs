use crate::{
    error::CliError,
    util::{green, yellow},
};
use devchain_config::{ConfigSource, FieldChange};
use nu_ansi_term::Color;

pub async fn diff(from: &ConfigSource, to: &ConfigSource) -> Result<(), CliError> {
    let a = from.load().await?;
    let b = to.load().await?;
    let changes = devchain_config::diff(&a, &b)?;

    if changes.is_empty() {
        println!("{} {from} and {to} are identical", green("ok:"));
        return Ok(());
    }

    println!("--- {from}\n+++ {to}");
    for change in &changes {
        let line = change.to_string();
        match change {
            FieldChange::Added { .. } => println!("{}", green(line)),
            FieldChange::Removed { .. } => println!("{}", Color::Red.paint(line)),
            FieldChange::Changed { .. } => println!("{}", yellow(line)),
        }
    }
    println!("{} change(s)", changes.len());
    Ok(())
}
