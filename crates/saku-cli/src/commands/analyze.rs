//! Analyze command implementation

use anyhow::{Context, Result};
use saku_core::format::{currency, percent, probability};
use saku_core::{Analysis, Analyzer, FinancialInput, ModelContext, RecommendationPlan, Settings, Status};

/// Which model decides what, shown under the recommendations
const MODEL_CAPTION: &str = "Status BOROS/HEMAT ditentukan oleh Logistic Regression. \
Random Forest digunakan untuk estimasi target tabungan ideal.";

pub fn cmd_analyze(
    models: &ModelContext,
    settings: &Settings,
    input: &FinancialInput,
    json: bool,
) -> Result<()> {
    let analysis = Analyzer::with_settings(models, settings)
        .analyze(input)
        .context("Analysis failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", render_report(&analysis, &settings.currency));
    }

    Ok(())
}

/// Render an analysis as the terminal report
pub fn render_report(analysis: &Analysis, symbol: &str) -> String {
    let mut out = String::new();
    let mut line = |s: String| {
        out.push_str(&s);
        out.push('\n');
    };

    line(String::new());
    line("📌 Status Keuangan".to_string());
    match analysis.prediction.status {
        Status::Frugal => line("   ✅ HEMAT: Berdasarkan prediksi Machine Learning".to_string()),
        Status::Wasteful => line("   ❌ BOROS: Berdasarkan prediksi Machine Learning".to_string()),
    }

    line(String::new());
    line("📄 Ringkasan Keuangan".to_string());
    line("   ─────────────────────────────".to_string());
    line(format!(
        "   Total Pengeluaran: {}",
        currency(symbol, analysis.total_expense)
    ));
    line(format!(
        "   Sisa Pendapatan:   {}",
        currency(symbol, analysis.remaining)
    ));
    let p = analysis.prediction.probabilities;
    line(format!(
        "   📊 Probabilitas ML → BOROS: {} | HEMAT: {}",
        probability(p.wasteful),
        probability(p.frugal)
    ));

    line(String::new());
    line("💡 Rekomendasi Pengeluaran".to_string());
    match &analysis.plan {
        RecommendationPlan::Reduce { target, items } => {
            line(format!(
                "   🔻 Untuk mencapai kondisi lebih hemat, disarankan mengurangi pengeluaran sekitar {}.",
                currency(symbol, *target)
            ));
            line("   Distribusi pengurangan yang disarankan:".to_string());
            for item in items {
                line(format!(
                    "   • {} → kurangi sekitar {}",
                    item.category.label(),
                    currency(symbol, item.suggested_cut)
                ));
            }
        }
        RecommendationPlan::NoReductionNeeded => {
            line("   ✅ Pengeluaran Anda sudah berada dalam kondisi HEMAT.".to_string());
            line("   Tidak diperlukan pengurangan pengeluaran saat ini.".to_string());
        }
    }
    line(format!("   {}", MODEL_CAPTION));

    line(String::new());
    line("📊 Komposisi Pengeluaran vs Tabungan".to_string());
    for slice in &analysis.composition.slices {
        line(format!(
            "   {:<12} {:>7}  {}",
            slice.label,
            percent(slice.percent),
            currency(symbol, slice.amount)
        ));
    }
    line(String::new());

    out
}
