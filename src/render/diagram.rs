//! # Lifecycle Diagram Model / 生命周期图模型
//!
//! The built-in lifecycle table the bundled diagram view draws from. Stages
//! (mounting, updating, unmounting) are columns; phases (render, pre-commit,
//! commit) are rows. The pre-commit phase and the less common methods only
//! show in advanced mode.
//!
//! 内置的生命周期表。阶段（挂载、更新、卸载）为列；
//! 时期（渲染、预提交、提交）为行。预提交时期和不常用的方法仅在高级模式下显示。

use tracing::warn;

use crate::core::controller::DiagramProps;
use crate::core::versions::VersionSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Mounting,
    Updating,
    Unmounting,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Mounting, Stage::Updating, Stage::Unmounting];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Render,
    PreCommit,
    Commit,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Render, Phase::PreCommit, Phase::Commit];

    /// Theme role that colors this phase.
    pub fn theme_role(self) -> &'static str {
        match self {
            Phase::Render => "render",
            Phase::PreCommit => "preCommit",
            Phase::Commit => "commit",
        }
    }
}

/// What makes a mounted component go through the update stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateTrigger {
    NewProps,
    SetState,
    ForceUpdate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleMethod {
    pub name: &'static str,
    pub stage: Stage,
    pub phase: Phase,
    pub advanced_only: bool,
}

const fn method(name: &'static str, stage: Stage, phase: Phase, advanced_only: bool) -> LifecycleMethod {
    LifecycleMethod {
        name,
        stage,
        phase,
        advanced_only,
    }
}

const METHODS: &[LifecycleMethod] = &[
    method("constructor", Stage::Mounting, Phase::Render, false),
    method("getDerivedStateFromProps", Stage::Mounting, Phase::Render, true),
    method("render", Stage::Mounting, Phase::Render, false),
    method("componentDidMount", Stage::Mounting, Phase::Commit, false),
    method("getDerivedStateFromProps", Stage::Updating, Phase::Render, true),
    method("shouldComponentUpdate", Stage::Updating, Phase::Render, true),
    method("render", Stage::Updating, Phase::Render, false),
    method("getSnapshotBeforeUpdate", Stage::Updating, Phase::PreCommit, true),
    method("componentDidUpdate", Stage::Updating, Phase::Commit, false),
    method("componentWillUnmount", Stage::Unmounting, Phase::Commit, false),
];

/// Update triggers that reach `getDerivedStateFromProps`. Before 16.4 only new props did.
fn derived_state_triggers(version: &str) -> &'static [UpdateTrigger] {
    match version {
        "16.3" => &[UpdateTrigger::NewProps],
        _ => &[
            UpdateTrigger::NewProps,
            UpdateTrigger::SetState,
            UpdateTrigger::ForceUpdate,
        ],
    }
}

/// The diagram as drawn for one set of props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramModel {
    /// Version the table was built for.
    pub version: String,
    /// Version the props asked for, which may be unknown.
    pub requested_version: String,
    pub advanced: bool,
    pub phases: Vec<Phase>,
    pub methods: Vec<LifecycleMethod>,
    pub derived_state_triggers: &'static [UpdateTrigger],
}

impl DiagramModel {
    /// Builds the table. Unknown versions are drawn as the newest known one.
    pub fn build(props: &DiagramProps, versions: &VersionSet) -> Self {
        let version = if versions.contains(&props.react_version) {
            props.react_version.clone()
        } else {
            warn!(
                requested = %props.react_version,
                shown = versions.latest(),
                "Unknown version selected, drawing the newest diagram"
            );
            versions.latest().to_string()
        };

        let phases = Phase::ALL
            .into_iter()
            .filter(|phase| props.advanced || *phase != Phase::PreCommit)
            .collect();
        let methods = METHODS
            .iter()
            .filter(|m| props.advanced || !m.advanced_only)
            .copied()
            .collect();

        Self {
            derived_state_triggers: derived_state_triggers(&version),
            version,
            requested_version: props.react_version.clone(),
            advanced: props.advanced,
            phases,
            methods,
        }
    }

    /// Whether the requested version had to be substituted.
    pub fn is_substituted(&self) -> bool {
        self.version != self.requested_version
    }

    pub fn cell(&self, stage: Stage, phase: Phase) -> impl Iterator<Item = &LifecycleMethod> {
        self.methods
            .iter()
            .filter(move |m| m.stage == stage && m.phase == phase)
    }
}
