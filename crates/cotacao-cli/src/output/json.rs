use cotacao_core::error::CotacaoError;
use cotacao_core::model::ExtractedData;

pub fn print(data: &ExtractedData) -> Result<(), CotacaoError> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}
