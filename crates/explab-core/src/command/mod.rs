//! Rendering of configuration trees into trainer command lines.
//!
//! The conventions are fixed once, since the external trainer's parser is
//! the consumer: one `--dotted.path value` token pair per leaf, in canonical
//! key order; booleans render as the explicit value tokens `true`/`false`;
//! sequences render comma-joined with no spaces (`100,50,25`), the empty
//! sequence as the empty token.

mod shell;

use crate::config::{ConfigMap, Scalar, Value};
use crate::error::CommandError;

/// Flatten `config` into the argument token vector for the external trainer.
///
/// The vector is what a launcher hands to the process-spawn facility
/// directly; no shell is involved and no quoting is applied.
pub fn to_args(config: &ConfigMap) -> Result<Vec<String>, CommandError> {
    let mut rendered = Vec::new();
    flatten(config, "", &mut rendered)?;
    Ok(rendered
        .into_iter()
        .flat_map(|arg| [arg.flag, arg.value])
        .collect())
}

/// Render the operator-visible command string: the trainer tokens followed
/// by the flattened arguments, each shell-quoted, joined with single spaces.
///
/// The result is copy-paste-runnable in a POSIX shell and reproduces the
/// exact argument vector a launcher passes to the trainer.
pub fn to_command<S: AsRef<str>>(
    trainer: &[S],
    config: &ConfigMap,
) -> Result<String, CommandError> {
    let mut tokens = Vec::with_capacity(trainer.len());
    for part in trainer {
        let part = part.as_ref();
        if part.contains('\0') {
            return Err(CommandError::ShellEscape {
                path: "<trainer>".to_owned(),
                reason: "contains a NUL byte".to_owned(),
            });
        }
        tokens.push(shell::quote(part));
    }
    let mut rendered = Vec::new();
    flatten(config, "", &mut rendered)?;
    for arg in rendered {
        tokens.push(arg.flag);
        tokens.push(shell::quote(&arg.value));
    }
    Ok(tokens.join(" "))
}

struct RenderedArg {
    flag: String,
    value: String,
}

fn flatten(map: &ConfigMap, prefix: &str, out: &mut Vec<RenderedArg>) -> Result<(), CommandError> {
    for (key, value) in map.iter() {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        check_key_segment(key, &path)?;
        match value {
            Value::Mapping(inner) => flatten(inner, &path, out)?,
            Value::Scalar(scalar) => {
                let value = render_scalar(scalar, &path)?;
                out.push(RenderedArg {
                    flag: format!("--{}", path),
                    value,
                });
            }
            Value::Sequence(seq) => {
                let value = render_sequence(seq, &path)?;
                out.push(RenderedArg {
                    flag: format!("--{}", path),
                    value,
                });
            }
        }
    }
    Ok(())
}

fn check_key_segment(segment: &str, path: &str) -> Result<(), CommandError> {
    let mut chars = segment.chars();
    let starts_ok = matches!(chars.next(), Some(c) if c.is_ascii_alphanumeric() || c == '_');
    if starts_ok && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return Ok(());
    }
    Err(CommandError::ShellEscape {
        path: path.to_owned(),
        reason: format!("key segment `{}` is not a valid flag name", segment),
    })
}

fn render_scalar(scalar: &Scalar, path: &str) -> Result<String, CommandError> {
    match scalar {
        Scalar::Float(x) if !x.is_finite() => Err(CommandError::UnsupportedValue {
            path: path.to_owned(),
            reason: "non-finite numbers have no command-line rendering".to_owned(),
        }),
        Scalar::Str(s) if s.contains('\0') => Err(CommandError::ShellEscape {
            path: path.to_owned(),
            reason: "contains a NUL byte".to_owned(),
        }),
        other => Ok(other.to_string()),
    }
}

fn render_sequence(seq: &[Scalar], path: &str) -> Result<String, CommandError> {
    let mut parts = Vec::with_capacity(seq.len());
    for (index, element) in seq.iter().enumerate() {
        let element_path = format!("{}[{}]", path, index);
        if matches!(element, Scalar::Str(s) if s.contains(',')) {
            return Err(CommandError::UnsupportedValue {
                path: element_path,
                reason: "sequence elements may not contain the `,` separator".to_owned(),
            });
        }
        parts.push(render_scalar(element, &element_path)?);
    }
    Ok(parts.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal POSIX word splitter for the round-trip checks: handles the
    // single-quote convention `quote` emits, nothing more.
    fn shell_split(command: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut in_word = false;
        let mut chars = command.chars();
        while let Some(c) = chars.next() {
            match c {
                ' ' if in_word => {
                    tokens.push(std::mem::take(&mut current));
                    in_word = false;
                }
                ' ' => {}
                '\'' => {
                    in_word = true;
                    for q in chars.by_ref() {
                        if q == '\'' {
                            break;
                        }
                        current.push(q);
                    }
                }
                '\\' => {
                    in_word = true;
                    if let Some(escaped) = chars.next() {
                        current.push(escaped);
                    }
                }
                other => {
                    in_word = true;
                    current.push(other);
                }
            }
        }
        if in_word {
            tokens.push(current);
        }
        tokens
    }

    fn trainer() -> Vec<String> {
        vec!["python".to_owned(), "scripts/run_experiment.py".to_owned()]
    }

    #[test]
    fn one_token_pair_per_leaf() {
        let config = ConfigMap::new()
            .with("mdp", ConfigMap::new().with("_name", "box2d.cartpole_mdp"))
            .with("normalize_mdp", true)
            .with(
                "policy",
                ConfigMap::new()
                    .with("_name", "mean_std_nn_policy")
                    .with("hidden_sizes", vec![100, 50, 25]),
            )
            .with("seed", 1);
        let args = to_args(&config).unwrap();
        // five leaves, two tokens each
        assert_eq!(args.len(), 10);
        for pair in args.chunks(2) {
            assert!(pair[0].starts_with("--"));
            assert!(!pair[1].starts_with("--"));
        }
    }

    #[test]
    fn values_decode_back_to_the_original_leaves() {
        let config = ConfigMap::new()
            .with("algo", ConfigMap::new().with("batch_size", 1000).with("step_size", 0.05))
            .with("policy", ConfigMap::new().with("hidden_sizes", vec![100, 50, 25]))
            .with("plot", true);
        let args = to_args(&config).unwrap();
        let find = |flag: &str| {
            let at = args.iter().position(|a| a == flag).unwrap();
            args[at + 1].clone()
        };
        assert_eq!(find("--algo.batch_size").parse::<i64>().unwrap(), 1000);
        assert_eq!(find("--algo.step_size").parse::<f64>().unwrap(), 0.05);
        assert_eq!(find("--plot").parse::<bool>().unwrap(), true);
        let sizes: Vec<i64> = find("--policy.hidden_sizes")
            .split(',')
            .map(|part| part.parse().unwrap())
            .collect();
        assert_eq!(sizes, vec![100, 50, 25]);
    }

    #[test]
    fn serialization_is_deterministic() {
        let config = ConfigMap::new()
            .with("seed", 1)
            .with("algo", ConfigMap::new().with("_name", "trpo"));
        let reordered = ConfigMap::new()
            .with("algo", ConfigMap::new().with("_name", "trpo"))
            .with("seed", 1);
        let first = to_command(&trainer(), &config).unwrap();
        let second = to_command(&trainer(), &config).unwrap();
        let third = to_command(&trainer(), &reordered).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, third);
    }

    #[test]
    fn nested_namespace_renders_a_dotted_path() {
        let config =
            ConfigMap::new().with("policy", ConfigMap::new().with("hidden_sizes", vec![100, 50, 25]));
        let args = to_args(&config).unwrap();
        assert_eq!(args, vec!["--policy.hidden_sizes", "100,50,25"]);
    }

    #[test]
    fn booleans_render_as_explicit_value_tokens() {
        let on = ConfigMap::new().with("algo", ConfigMap::new().with("whole_paths", true));
        let off = ConfigMap::new().with("algo", ConfigMap::new().with("whole_paths", false));
        assert_eq!(to_args(&on).unwrap(), vec!["--algo.whole_paths", "true"]);
        assert_eq!(to_args(&off).unwrap(), vec!["--algo.whole_paths", "false"]);
    }

    #[test]
    fn empty_sequence_renders_as_the_empty_token() {
        let config = ConfigMap::new()
            .with("policy", ConfigMap::new().with("hidden_sizes", Vec::<i64>::new()));
        assert_eq!(to_args(&config).unwrap(), vec!["--policy.hidden_sizes", ""]);
        let command = to_command(&trainer(), &config).unwrap();
        assert!(command.ends_with("--policy.hidden_sizes ''"));
    }

    #[test]
    fn non_finite_float_is_unsupported() {
        let config = ConfigMap::new().with("algo", ConfigMap::new().with("step_size", f64::NAN));
        let err = to_args(&config).unwrap_err();
        assert!(matches!(
            &err,
            CommandError::UnsupportedValue { path, .. } if path == "algo.step_size"
        ));
    }

    #[test]
    fn sequence_element_with_separator_is_unsupported() {
        let config = ConfigMap::new().with("tags", vec!["a,b", "c"]);
        let err = to_args(&config).unwrap_err();
        assert!(matches!(
            &err,
            CommandError::UnsupportedValue { path, .. } if path == "tags[0]"
        ));
    }

    #[test]
    fn nul_byte_cannot_be_escaped() {
        let config = ConfigMap::new().with("exp_name", "bad\0name");
        let err = to_args(&config).unwrap_err();
        assert!(matches!(err, CommandError::ShellEscape { .. }));
    }

    #[test]
    fn invalid_key_segment_reports_its_path() {
        let config =
            ConfigMap::new().with("algo", ConfigMap::new().with("step size", 0.05));
        let err = to_args(&config).unwrap_err();
        assert!(matches!(
            &err,
            CommandError::ShellEscape { path, .. } if path == "algo.step size"
        ));
    }

    #[test]
    fn end_to_end_cartpole_scenario() {
        let config = ConfigMap::new()
            .with("mdp", ConfigMap::new().with("_name", "box2d.cartpole_mdp"))
            .with(
                "algo",
                ConfigMap::new().with("_name", "vpg").with("batch_size", 1000),
            )
            .with("seed", 1);
        let command = to_command(&trainer(), &config).unwrap();
        assert_eq!(
            command,
            "python scripts/run_experiment.py \
             --algo._name vpg --algo.batch_size 1000 \
             --mdp._name box2d.cartpole_mdp --seed 1"
        );
    }

    #[test]
    fn quoted_values_retokenize_to_the_argument_vector() {
        let config = ConfigMap::new()
            .with("exp_name", "trpo double pendulum")
            .with("mdp", ConfigMap::new().with("_name", "box2d.double_pendulum_mdp"));
        let command = to_command(&trainer(), &config).unwrap();
        let mut expected = trainer();
        expected.extend(to_args(&config).unwrap());
        assert_eq!(shell_split(&command), expected);
    }
}
