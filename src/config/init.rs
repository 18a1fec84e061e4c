use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::{save_config, Config};
use crate::scoring::{
    AttributeKey, RawWeightConfig, WeightConfig, DEFAULT_IDEAL_AVERAGE_TEMP,
    DEFAULT_IDEAL_POPULATION_DENSITY, IDEAL_RANGE, WEIGHT_RANGE,
};

/// Line-oriented prompt over any input/output pair.
struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Prompt with a message and return trimmed input. EOF reads as empty.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;
        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("Failed to read input")?;
        Ok(line.trim().to_string())
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message).context("Failed to write output")
    }

    /// Yes/no question; empty input takes the default.
    fn prompt_yes_no(&mut self, message: &str, default_yes: bool) -> Result<bool> {
        let hint = if default_yes { "Y/n" } else { "y/N" };
        let input = self.prompt(&format!("{} [{}]: ", message, hint))?.to_lowercase();
        if input.is_empty() {
            Ok(default_yes)
        } else {
            Ok(input == "y" || input == "yes")
        }
    }

    /// Ask for a number in `range` until one is given; empty input takes the default.
    fn prompt_number(
        &mut self,
        message: &str,
        default: f64,
        range: std::ops::RangeInclusive<f64>,
    ) -> Result<f64> {
        loop {
            let input = self.prompt(&format!("{} [{}]: ", message, default))?;
            if input.is_empty() {
                return Ok(default);
            }
            match input.parse::<f64>() {
                Ok(v) if range.contains(&v) => return Ok(v),
                _ => self.say(&format!(
                    "  Invalid: must be a number from {} to {}. Try again.",
                    range.start(),
                    range.end()
                ))?,
            }
        }
    }
}

/// Walk the user through every attribute and return the chosen weights.
pub fn prompt_weights<R: BufRead, W: Write>(input: R, output: W) -> Result<WeightConfig> {
    let mut p = Prompter { input, output };

    p.say("")?;
    p.say("States Ranker Configuration")?;
    p.say("===========================")?;
    p.say("")?;
    p.say("Prioritizing an attribute doubles its score and halves every attribute you did not prioritize.")?;
    p.say("Weights (0-2) scale an attribute further; 1 leaves it unchanged.")?;
    p.say("")?;

    let mut config = WeightConfig::default();
    for key in AttributeKey::ALL {
        if p.prompt_yes_no(&format!("Prioritize {}?", key.label()), false)? {
            config = config.prioritize(key);
        }
        let weight = p.prompt_number(
            &format!("  {} weight", key.label()),
            config.weight(key),
            WEIGHT_RANGE,
        )?;
        config = config.with_weight(key, weight);
    }

    p.say("")?;
    let temp = p.prompt_number(
        "What is the best average temperature (F)?",
        DEFAULT_IDEAL_AVERAGE_TEMP,
        IDEAL_RANGE,
    )?;
    let density = p.prompt_number(
        "What is the best population per square mile?",
        DEFAULT_IDEAL_POPULATION_DENSITY,
        IDEAL_RANGE,
    )?;

    Ok(config
        .with_ideal_average_temp(temp)
        .with_ideal_population_density(density))
}

/// Write a config file at `path`.
///
/// With `interactive`, the weights are asked on stdin; otherwise every
/// attribute is written with its default. Refuses to overwrite an existing
/// file unless `force` is set.
pub fn run_init(path: &Path, interactive: bool, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    let weights = if interactive {
        let stdin = std::io::stdin();
        prompt_weights(stdin.lock(), std::io::stdout())?
    } else {
        WeightConfig::default()
    };

    let config = Config {
        data: None,
        weights: RawWeightConfig::from(&weights),
    };
    save_config(path, &config)?;

    tracing::info!(path = %path.display(), "config written");
    Ok(())
}
