use clap::ValueEnum;
use explab_core::ConfigMap;
use strum::Display;

/// Built-in experiment presets, one per curated launcher configuration.
#[derive(Debug, Clone, ValueEnum, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum PresetName {
    CartpoleVpg,
    DoublePendulumTrpo,
}

pub(crate) fn summary(preset: &PresetName) -> &'static str {
    match preset {
        PresetName::CartpoleVpg => "VPG on the Box2D cartpole with a zero baseline",
        PresetName::DoublePendulumTrpo => {
            "TRPO on the Box2D double pendulum, warm-started from a checkpoint"
        }
    }
}

/// Build the configuration for `preset`. Each call constructs a fresh,
/// immutable value; seed changes and other variations are `--set` overrides.
pub(crate) fn preset_config(preset: &PresetName) -> ConfigMap {
    match preset {
        PresetName::CartpoleVpg => cartpole_vpg(),
        PresetName::DoublePendulumTrpo => double_pendulum_trpo(),
    }
}

fn cartpole_vpg() -> ConfigMap {
    ConfigMap::new()
        .with("mdp", ConfigMap::new().with("_name", "box2d.cartpole_mdp"))
        .with("normalize_mdp", true)
        .with(
            "policy",
            ConfigMap::new()
                .with("_name", "mean_std_nn_policy")
                .with("hidden_sizes", Vec::<i64>::new()),
        )
        .with("baseline", ConfigMap::new().with("_name", "zero_baseline"))
        .with(
            "algo",
            ConfigMap::new()
                .with("_name", "vpg")
                .with("update_method", "sgd")
                .with("learning_rate", 1)
                .with("batch_size", 1000)
                .with("n_itr", 500)
                .with("max_path_length", 100),
        )
        .with("n_parallel", 1)
        .with("snapshot_mode", "none")
        .with("seed", 1)
}

fn double_pendulum_trpo() -> ConfigMap {
    let seed = 1;
    ConfigMap::new()
        .with(
            "mdp",
            ConfigMap::new().with("_name", "box2d.double_pendulum_mdp"),
        )
        .with("normalize_mdp", true)
        .with(
            "policy",
            ConfigMap::new()
                .with("_name", "mean_std_nn_policy")
                .with("hidden_sizes", vec![100, 50, 25])
                .with(
                    "load_params",
                    format!("data/ppo_double_skip2_pendulum_seed_{}/itr_1.pkl", seed),
                )
                .with(
                    "load_params_masks",
                    vec![true, true, true, true, false, false, false, false, false],
                ),
        )
        .with(
            "baseline",
            ConfigMap::new().with("_name", "linear_feature_baseline"),
        )
        .with(
            "exp_name",
            format!("ppo_double_skip2_pendulum_seed_{}", seed),
        )
        .with(
            "algo",
            ConfigMap::new()
                .with("_name", "trpo")
                .with("step_size", 0.05)
                .with("whole_paths", true)
                .with("batch_size", 10000)
                .with("max_path_length", 100)
                .with("n_itr", 500)
                .with("plot", true),
        )
        .with("n_parallel", 3)
        .with("seed", seed)
        .with("plot", true)
}
