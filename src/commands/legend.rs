use crate::core::{
    colors::TerminalHighlights,
    column::GitColumn,
    config::IndicatorConfig,
    error::Result,
    indicator::IndicatorCategory,
    output::print_section_header,
};

/// Print every category with the text it renders as.
pub fn execute_legend(raw: bool) -> Result<()> {
    let mut config = IndicatorConfig::load_or_default()?;
    if raw {
        config.raw_mode = true;
    }

    print_section_header("Legend");
    for line in legend_lines(&config) {
        println!("{line}");
    }
    Ok(())
}

/// Legend rows in display order. Raw mode shows the code pattern of each category.
pub fn legend_lines(config: &IndicatorConfig) -> Vec<String> {
    let column = GitColumn::new(config.clone());
    let mut highlights = TerminalHighlights::new();
    column.register_highlights(&mut highlights);

    let width = IndicatorCategory::ALL
        .iter()
        .filter_map(|category| highlights.group(*category))
        .map(|group| legend_text(config, &group.glyph, &group.pattern).chars().count())
        .max()
        .unwrap_or(1);

    IndicatorCategory::ALL
        .iter()
        .filter_map(|category| highlights.group(*category))
        .map(|group| {
            let text = legend_text(config, &group.glyph, &group.pattern);
            let padded = format!("{text:<width$}");
            format!(
                "   {}  {}",
                highlights.paint(Some(group.category), &padded),
                group.category
            )
        })
        .collect()
}

fn legend_text<'a>(config: &IndicatorConfig, glyph: &'a str, pattern: &'a str) -> &'a str {
    if config.raw_mode {
        pattern
    } else {
        glyph
    }
}
