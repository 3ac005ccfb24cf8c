//! medkit-tools
//!
//! The catalog of AI-backed clinical tools. Pure data: each tool is an
//! input schema, an output schema, and a prompt template. No AWS
//! dependency.

pub mod error;
pub mod tools;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use ts_rs::TS;

use medkit_core::contract::ToolContract;
use medkit_core::error::ConfigurationError;
use medkit_core::registry::ContractRegistry;
use medkit_core::schema::Schema;

use error::ToolsError;

/// Trait implemented by each tool declaration.
pub trait Tool: Send + Sync {
    /// Unique kebab-case identifier (e.g., "drug-interaction-checker").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Drug Interaction Checker").
    fn name(&self) -> &str;

    /// One-line description shown in the catalog.
    fn description(&self) -> &str;

    fn input_schema(&self) -> Schema;

    fn output_schema(&self) -> Schema;

    /// Prompt template rendered against validated input.
    fn template(&self) -> &str;

    /// Compile this declaration into an immutable contract.
    fn contract(&self) -> Result<ToolContract, ConfigurationError> {
        ToolContract::new(
            self.id(),
            self.input_schema(),
            self.output_schema(),
            self.template(),
        )
    }

    fn summary(&self) -> ToolSummary {
        ToolSummary {
            id: self.id().to_string(),
            name: self.name().to_string(),
            description: self.description().to_string(),
        }
    }

    fn detail(&self) -> ToolDetail {
        ToolDetail {
            id: self.id().to_string(),
            name: self.name().to_string(),
            description: self.description().to_string(),
            input: self.input_schema().to_json_schema(),
            output: self.output_schema().to_json_schema(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToolSummary {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// A tool with its contracts rendered as JSON Schema documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToolDetail {
    pub id: String,
    pub name: String,
    pub description: String,
    pub input: Value,
    pub output: Value,
}

/// Return all declared tools.
pub fn all_tools() -> Vec<Box<dyn Tool>> {
    vec![
        Box::new(tools::ai_diagnosis_assistant::AiDiagnosisAssistant),
        Box::new(tools::antibiotic_guide::AntibioticGuide),
        Box::new(tools::case_simulation::CaseSimulation),
        Box::new(tools::case_summary::CaseSummary),
        Box::new(tools::contraindication_finder::ContraindicationFinder),
        Box::new(tools::ct_scan_analyzer::CtScanAnalyzer),
        Box::new(tools::ddx_generator::DdxGenerator),
        Box::new(tools::disease_summary::DiseaseSummary),
        Box::new(tools::drug_interaction_checker::DrugInteractionChecker),
        Box::new(tools::lab_interpretation_assistant::LabInterpretationAssistant),
        Box::new(tools::lab_report_analyzer::LabReportAnalyzer),
        Box::new(tools::mnemonic_generator::MnemonicGenerator),
        Box::new(tools::mri_brain_atlas::MriBrainAtlas),
        Box::new(tools::pill_identifier::PillIdentifier),
        Box::new(tools::pregnancy_safety::PregnancySafety),
        Box::new(tools::quiz_explanation::QuizExplanation),
        Box::new(tools::report_explainer::ReportExplainer),
        Box::new(tools::skin_lesion_classifier::SkinLesionClassifier),
        Box::new(tools::soap_note_generator::SoapNoteGenerator),
        Box::new(tools::ultrasound_interpreter::UltrasoundInterpreter),
        Box::new(tools::urine_analyzer::UrineAnalyzer),
        Box::new(tools::x_ray_interpreter::XRayInterpreter),
    ]
}

/// Look up a tool by ID.
pub fn get_tool(id: &str) -> Option<Box<dyn Tool>> {
    all_tools().into_iter().find(|t| t.id() == id)
}

/// Compile every declared tool into a registry.
///
/// Fails on the first declaration whose template or schemas are
/// inconsistent, so a broken tool is never reachable.
pub fn build_registry() -> Result<ContractRegistry, ToolsError> {
    let mut registry = ContractRegistry::new();
    for tool in all_tools() {
        registry.register(tool.contract()?)?;
    }
    info!(count = registry.len(), "tool registry built");
    Ok(registry)
}
