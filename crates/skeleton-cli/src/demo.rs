//! The demonstration run: wires the adder, the value holder and the version
//! helper together and renders what they produced.

use serde::Serialize;
use tracing::{info, instrument};

use skeleton_core::prelude::{ValueChange, ValueHolder, ValueService, add, project_version};

use crate::{cli::OutputFormat, config::AppConfig, error::CliResult, output::OutputManager};

/// Everything the demo prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub greeting: String,
    pub version: String,
    pub sum: SumReport,
    /// Holder value right after construction.
    pub initial_value: String,
    /// One entry per configured update, in order.
    pub changes: Vec<ValueChange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SumReport {
    pub lhs: i8,
    pub rhs: i8,
    pub result: i16,
}

impl DemoReport {
    /// Holder values in the order they were observed.
    pub fn holder_values(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.initial_value.as_str())
            .chain(self.changes.iter().map(|c| c.after.as_str()))
    }
}

/// Run the demo against `holder`, which must already hold
/// `config.demo.initial_value`.
#[instrument(skip_all)]
pub fn run(config: &AppConfig, holder: Box<dyn ValueHolder>) -> DemoReport {
    let demo = &config.demo;
    let sum = SumReport {
        lhs: demo.lhs,
        rhs: demo.rhs,
        result: add(demo.lhs, demo.rhs),
    };

    let mut service = ValueService::new(holder);
    let initial_value = service.get_value();
    let changes = demo
        .updates
        .iter()
        .map(|value| service.apply(value.as_str()))
        .collect::<Vec<_>>();

    info!(updates = changes.len(), "Demo finished");

    DemoReport {
        greeting: config.greeting.clone(),
        version: project_version(),
        sum,
        initial_value,
        changes,
    }
}

/// Write the report in the resolved output format.
pub fn render(report: &DemoReport, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(report);
    }

    output.header(&report.greeting)?;
    output.info(&format!("Version: {}", report.version))?;

    let SumReport { lhs, rhs, result } = report.sum;
    output.print(&format!("{lhs} + {rhs} = {result}"))?;

    for value in report.holder_values() {
        output.print(&format!("Holder value = {value}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use skeleton_adapters::{HolderCall, RecordingValueHolder, StringValueHolder};

    use super::*;

    fn default_report() -> DemoReport {
        let config = AppConfig::default();
        let holder = StringValueHolder::new(config.demo.initial_value.clone());
        run(&config, Box::new(holder))
    }

    #[test]
    fn default_run_matches_scenario() {
        let report = default_report();

        assert_eq!(report.greeting, "Hello World!");
        assert_eq!(report.version, "1.2.3-rc1");
        assert_eq!(report.sum.result, 3);
        assert_eq!(
            report.holder_values().collect::<Vec<_>>(),
            ["Initial value", "New value 1", "New value 2"]
        );
    }

    #[test]
    fn changes_chain_before_and_after() {
        let report = default_report();

        assert_eq!(report.changes[0].before, "Initial value");
        assert_eq!(report.changes[0].after, "New value 1");
        assert_eq!(report.changes[1].before, "New value 1");
        assert_eq!(report.changes[1].after, "New value 2");
    }

    #[test]
    fn every_update_reaches_the_holder() {
        let mut config = AppConfig::default();
        config.demo.updates = vec!["only".into()];
        let holder = RecordingValueHolder::new("start");

        let report = run(&config, Box::new(holder.clone()));

        assert_eq!(holder.verify_set_once("only"), Ok(()));
        assert_eq!(
            holder.calls(),
            vec![
                HolderCall::Get,
                HolderCall::Get,
                HolderCall::Set("only".into()),
                HolderCall::Get
            ]
        );
        assert_eq!(report.initial_value, "start");
    }

    #[test]
    fn no_updates_reports_initial_value_only() {
        let mut config = AppConfig::default();
        config.demo.updates.clear();

        let report = run(&config, Box::new(StringValueHolder::new("alone")));

        assert!(report.changes.is_empty());
        assert_eq!(report.holder_values().collect::<Vec<_>>(), ["alone"]);
    }

    #[test]
    fn sum_uses_configured_operands() {
        let mut config = AppConfig::default();
        config.demo.lhs = i8::MAX;
        config.demo.rhs = i8::MAX;

        let report = run(&config, Box::new(StringValueHolder::default()));
        assert_eq!(report.sum.result, 254);
    }

    #[test]
    fn report_serialises_to_json() {
        let json = serde_json::to_value(default_report()).unwrap();

        assert_eq!(json["version"], "1.2.3-rc1");
        assert_eq!(json["sum"]["result"], 3);
        assert_eq!(json["changes"][1]["after"], "New value 2");
    }
}
