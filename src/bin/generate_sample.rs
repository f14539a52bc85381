use std::sync::Arc;

use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform value in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);

    // (course, typical open-competition cutoff)
    let courses = [
        ("Medicina", 760.0),
        ("Direito", 700.0),
        ("Engenharia Civil", 660.0),
        ("Pedagogia", 600.0),
    ];
    let campuses = [
        ("UFRJ", "RJ"),
        ("USP", "SP"),
        ("UFMG", "MG"),
        ("UFBA", "BA"),
        ("UFPE", "PE"),
        ("UFRGS", "RS"),
    ];
    // (category code, modality label, cutoff offset from open competition)
    let categories = [
        ("AC", "Ampla concorrência", 0.0),
        ("L1", "Escola pública, renda até 1 salário mínimo", -40.0),
        ("L2", "Escola pública, pretos, pardos e indígenas, renda até 1 salário mínimo", -55.0),
        ("L5", "Escola pública, independente de renda", -30.0),
    ];

    let mut course_col = Vec::new();
    let mut inst_col = Vec::new();
    let mut state_col = Vec::new();
    let mut category_col = Vec::new();
    let mut modality_col = Vec::new();
    let mut cutoff_col: Vec<Option<f64>> = Vec::new();

    for &(course, base) in &courses {
        for &(inst, state) in &campuses {
            let campus_shift = rng.range(-35.0, 35.0);
            for &(code, label, offset) in &categories {
                course_col.push(course);
                inst_col.push(inst);
                state_col.push(state);
                category_col.push(code);
                modality_col.push(label);

                // Roughly one offer in twenty has no published cutoff.
                let cutoff = if rng.next_f64() < 0.05 {
                    None
                } else {
                    let raw = base + offset + campus_shift + rng.range(-10.0, 10.0);
                    Some((raw * 100.0).round() / 100.0)
                };
                cutoff_col.push(cutoff);
            }
        }
    }

    let text = |name: &str| Field::new(name, DataType::Utf8, false);
    let schema = Arc::new(Schema::new(vec![
        text("NO_CURSO"),
        text("SG_IES"),
        text("SG_UF_CAMPUS"),
        text("TIPO_CONCORRENCIA"),
        text("DS_MOD_CONCORRENCIA"),
        Field::new("NU_NOTACORTE", DataType::Float64, true),
    ]));

    let n_rows = cutoff_col.len();
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(course_col)),
            Arc::new(StringArray::from(inst_col)),
            Arc::new(StringArray::from(state_col)),
            Arc::new(StringArray::from(category_col)),
            Arc::new(StringArray::from(modality_col)),
            Arc::new(Float64Array::from(cutoff_col)),
        ],
    )?;

    // Write Parquet
    let output_path = "sample_offers.parquet";
    let file = std::fs::File::create(output_path)?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;

    println!("Wrote {n_rows} offers ({} courses) to {output_path}", courses.len());
    Ok(())
}
