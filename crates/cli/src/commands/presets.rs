use crate::util::bold;
use devchain_config::Preset;

pub fn presets() {
    println!("{}", render_presets());
}

fn render_presets() -> String {
    let width = Preset::all()
        .iter()
        .map(|p| p.to_string().len())
        .max()
        .unwrap_or_default();
    Preset::all()
        .into_iter()
        .map(|preset| {
            let name = format!("{:width$}", preset.to_string());
            format!("{}  {}", bold(name), preset.description())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
