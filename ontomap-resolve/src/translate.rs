//! Record-level translation of code values

use crate::classify::{Classifier, OutcomeClass, Resolution};
use crate::log::ResolutionLog;
use ontomap_core::config::ResolutionConfig;
use ontomap_core::OntomapResult;
use ontomap_tree::closest_common_ancestor;
use tracing::{debug, info};

/// Values written back into a record's code and options columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatedCode {
    pub code: String,
    pub options: String,
}

impl TranslatedCode {
    pub fn needs_review(&self) -> bool {
        !self.options.is_empty()
    }
}

pub struct Translator<'a> {
    classifier: Classifier<'a>,
    auto_resolve: bool,
}

impl<'a> Translator<'a> {
    pub fn new(classifier: Classifier<'a>, config: &ResolutionConfig) -> Self {
        Self {
            classifier: classifier.with_passthrough(config),
            auto_resolve: config.auto_resolve,
        }
    }

    pub fn with_auto_resolve(mut self, enabled: bool) -> Self {
        self.auto_resolve = enabled;
        self
    }

    pub fn is_passthrough(&self, code: &str) -> bool {
        self.classifier.is_passthrough(code)
    }

    /// Sentinels come back from the classifier as stable and are copied through
    pub fn translate_code(&self, code: &str, log: &mut ResolutionLog) -> OntomapResult<TranslatedCode> {
        let resolution = self.classifier.classify(code)?;
        log.record(&resolution);

        if resolution.is_easily_resolved() {
            let code = resolution
                .sole_candidate()
                .map(|c| c.to_string())
                .unwrap_or_default();
            return Ok(TranslatedCode {
                code,
                options: String::new(),
            });
        }

        let code = if self.auto_resolve {
            self.auto_code(&resolution)?
        } else {
            String::new()
        };
        Ok(TranslatedCode {
            code,
            options: resolution.descriptor(),
        })
    }

    /// Translate every code in order, sharing one log
    pub fn translate_records<'c, I>(&self, codes: I, log: &mut ResolutionLog) -> OntomapResult<Vec<TranslatedCode>>
    where
        I: IntoIterator<Item = &'c str>,
    {
        let translated = codes
            .into_iter()
            .map(|code| self.translate_code(code, log))
            .collect::<OntomapResult<Vec<_>>>()?;

        let review = translated.iter().filter(|t| t.needs_review()).count();
        info!(
            records = translated.len(),
            distinct_codes = log.len(),
            needs_review = review,
            "translation finished"
        );
        Ok(translated)
    }

    /// Best single code for a result that has no clear answer
    fn auto_code(&self, resolution: &Resolution) -> OntomapResult<String> {
        let chosen = match resolution.outcome {
            OutcomeClass::SingleRefined => resolution.sole_candidate().cloned(),
            OutcomeClass::Ambiguous { .. } | OutcomeClass::Unmappable => {
                match &resolution.closest_common_ancestor {
                    Some(ancestor) => Some(ancestor.clone()),
                    None => Some(closest_common_ancestor(
                        &resolution.candidates,
                        self.classifier.target(),
                        self.classifier.limits(),
                    )?),
                }
            }
            _ => None,
        };
        if let Some(code) = &chosen {
            debug!(source = %resolution.source_code, chosen = %code, "auto-resolved");
        }
        Ok(chosen.map(String::from).unwrap_or_default())
    }
}
