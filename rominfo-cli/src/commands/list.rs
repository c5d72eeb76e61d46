use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rominfo_lib::ParserRegistry;

pub(crate) fn run_list(registry: &ParserRegistry) {
    log::info!("Supported formats:");
    log::info!("");

    let mut current_manufacturer = "";

    for entry in registry.parsers() {
        let manufacturer = entry.platform.manufacturer();
        if manufacturer != current_manufacturer {
            if !current_manufacturer.is_empty() {
                log::info!("");
            }
            current_manufacturer = manufacturer;
            log::info!("{}:", manufacturer.if_supports_color(Stdout, |t| t.bold()));
        }

        log::info!(
            "  {} [{}]{}",
            entry
                .platform
                .short_name()
                .if_supports_color(Stdout, |t| t.bold()),
            entry
                .platform
                .display_name()
                .if_supports_color(Stdout, |t| t.cyan()),
            if entry.parser.sniffs_content() {
                format!(" {}", "(sniff)".if_supports_color(Stdout, |t| t.green()))
            } else {
                String::new()
            },
        );
        log::info!("    Extensions: {}", entry.extensions.join(", "));
        log::info!("    Aliases: {}", entry.platform.aliases().join(", "));
    }
}
