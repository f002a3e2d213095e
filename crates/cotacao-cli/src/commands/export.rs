use cotacao_core::export;
use cotacao_core::model::ExtractedData;
use std::path::PathBuf;

pub fn run(
    input_file: PathBuf,
    dir: PathBuf,
    to_stdout: bool,
    vocab_files: Vec<PathBuf>,
) -> Result<(), cotacao_core::error::CotacaoError> {
    // Determine input type by extension
    let is_json = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let data = if is_json {
        // Load a result saved by `cotacao parse -O`
        let json_bytes = std::fs::read(&input_file)?;
        serde_json::from_slice::<ExtractedData>(&json_bytes)?
    } else {
        let options = super::parse_options(&vocab_files, false)?;
        super::parse_file(&input_file, &options)?
    };

    if to_stdout {
        println!("{}", export::to_csv(&data));
        return Ok(());
    }

    let path = export::write_csv(&data, &dir)?;
    eprintln!(
        "Exported {} plan(s) to {}",
        data.plans.len(),
        path.display()
    );
    Ok(())
}
