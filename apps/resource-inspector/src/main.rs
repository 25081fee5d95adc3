use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use handkit_resources::prelude::*;
use handkit_resources::{Image, ResourceWriter};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut args = std::env::args_os().skip(1);
    let Some(path) = args.next().map(PathBuf::from) else {
        anyhow::bail!("usage: handkit-inspect <bundle.res> [reencoded.res]");
    };
    let output = args.next().map(PathBuf::from);

    let file = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
    let table = decode(BufReader::new(file))
        .with_context(|| format!("decoding {}", path.display()))?;
    log::info!("{}: {} resources", path.display(), table.len());

    print_summary(&table);

    if let Some(output) = output {
        let file =
            File::create(&output).with_context(|| format!("creating {}", output.display()))?;
        ResourceWriter::write(&table, file)
            .with_context(|| format!("writing {}", output.display()))?;
        log::info!("re-encoded into {}", output.display());
    }
    Ok(())
}

fn print_summary(table: &ResourceTable) {
    let version = table.version();
    println!("format {}.{}", version.major, version.minor);
    for entry in table.metadata() {
        println!("  meta {entry}");
    }

    for (name, resource) in table.iter() {
        match resource {
            Resource::Image(image) => {
                let size = image
                    .dimensions()
                    .map_or_else(|| "?".to_owned(), |(width, height)| format!("{width}x{height}"));
                let animated = if image.is_animated() { " animated" } else { "" };
                let kind = match &**image {
                    Image::Encoded(encoded) => format!("{:?}", encoded.format),
                    Image::Indexed(indexed) => format!("indexed/{}", indexed.palette.len()),
                    Image::Animation(animation) => format!("{} frames", animation.frames.len()),
                    Image::Vector(_) => "svg".to_owned(),
                };
                println!("image  {name:<24} {size} {kind}{animated}");
            }
            Resource::Font(font) => {
                let form = if font.truetype.is_some() {
                    "truetype"
                } else if font.bitmap.is_some() {
                    "bitmap"
                } else {
                    "system"
                };
                println!("font   {name:<24} {form}");
            }
            Resource::Theme(raw) => {
                let status = match table.theme(name) {
                    Ok(_) => "wired".to_owned(),
                    Err(err) => {
                        log::warn!("theme {name:?}: {err}");
                        format!("unresolved: {err}")
                    }
                };
                println!("theme  {name:<24} {} entries, {status}", raw.len());
            }
            Resource::Data(data) => println!("data   {name:<24} {} bytes", data.len()),
            Resource::L10n(l10n) => {
                let languages: Vec<&str> = l10n.languages().collect();
                println!(
                    "l10n   {name:<24} {} keys [{}]",
                    l10n.keys().len(),
                    languages.join(", ")
                );
            }
        }
    }
}
