use anyhow::{Result, bail};

/// Seed used when the command line names none.
pub const DEFAULT_SEED: u64 = 1337;

/// Resolve CLI seed tokens into distinct seeds, keeping first-seen order.
///
/// Negative integers map to their magnitude.
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<u64>> {
    let mut seeds: Vec<u64> = Vec::new();

    for token in tokens {
        if token.is_empty() {
            continue;
        }

        let seed = if let Ok(value) = token.parse::<u64>() {
            value
        } else if let Ok(value) = token.parse::<i64>() {
            value.unsigned_abs()
        } else {
            bail!("Unrecognized seed token: {token}");
        };

        if !seeds.contains(&seed) {
            seeds.push(seed);
        }
    }

    if seeds.is_empty() {
        seeds.push(DEFAULT_SEED);
    }

    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parses_and_dedupes() {
        let seeds = resolve_seed_inputs(&tokens(&["7", "-7", "18446744073709551615", "7"]))
            .expect("valid seeds");
        assert_eq!(seeds, vec![7, u64::MAX]);
    }

    #[test]
    fn empty_input_falls_back_to_default() {
        assert_eq!(resolve_seed_inputs(&[]).expect("default"), vec![DEFAULT_SEED]);
    }

    #[test]
    fn rejects_words() {
        let err = resolve_seed_inputs(&tokens(&["banana"])).unwrap_err();
        assert!(err.to_string().contains("banana"));
    }
}
