use tract_onnx::prelude::*;

/// Fixed order expected by the model: hours studied, previous scores,
/// extracurricular flag, sleep hours, sample question papers practiced.
pub const FEATURE_COUNT: usize = 5;

/// A pre-trained regression model mapping a feature vector to a single
/// performance index. Handlers depend on this trait only, so tests can
/// substitute a fake model.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &[f32; FEATURE_COUNT]) -> anyhow::Result<f32>;
}

/// ONNX-backed predictor loaded once at startup and shared read-only
/// across requests.
pub struct OnnxModel {
    plan: SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>,
}

impl OnnxModel {
    pub fn load<P: AsRef<std::path::Path>>(model_path: P) -> TractResult<Self> {
        let plan = tract_onnx::onnx()
            .model_for_path(model_path)?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(f32::datum_type(), tvec!(1, FEATURE_COUNT)),
            )?
            .into_optimized()?
            .into_runnable()?;

        Ok(Self { plan })
    }
}

impl Predictor for OnnxModel {
    fn predict(&self, features: &[f32; FEATURE_COUNT]) -> anyhow::Result<f32> {
        let input = Tensor::from_shape(&[1, FEATURE_COUNT], features)?;
        let outputs = self.plan.run(tvec!(input.into()))?;

        let prediction = *outputs[0]
            .to_array_view::<f32>()?
            .iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("model produced no output"))?;

        Ok(prediction)
    }
}
