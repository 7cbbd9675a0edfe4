//! Wire contracts shared with the shopping-assistant client.
//!
//! Field names are the Portuguese ones the mobile client already speaks,
//! so every struct serializes exactly as it appears on the wire.

use serde::{Deserialize, Serialize};

/// Severity of a purchase-risk alert, lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alerta {
    None,
    Yellow,
    Orange,
    Red,
}

/// A product entry as supplied by the client.
///
/// `quantidade` is a decimal even though some client versions send an
/// integer; a decimal accepts both without loss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Produto {
    pub id: String,
    pub nome: String,
    pub preco_unitario: f64,
    pub quantidade: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnaliseRequest {
    pub produtos: Vec<Produto>,
    pub orcamento_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnaliseItem {
    pub id: String,
    pub alerta: Alerta,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnaliseResponse {
    pub analise: Vec<AnaliseItem>,
}

impl AnaliseResponse {
    pub fn empty() -> Self {
        Self {
            analise: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReceitaRequest {
    pub ingredientes: Vec<String>,
    pub tipo_refeicao: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceitaResponse {
    pub titulo: String,
    pub receita_texto: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComplementosRequest {
    pub itens_lista: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sugestao {
    pub item_base: String,
    pub sugestao: String,
    pub motivo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplementosResponse {
    pub sugestoes: Vec<Sugestao>,
}

impl ComplementosResponse {
    pub fn empty() -> Self {
        Self {
            sugestoes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CarrinhoRequest {
    pub lista_planejada: Vec<String>,
    pub itens_carrinho: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrinhoResponse {
    pub faltantes: Vec<String>,
}

impl CarrinhoResponse {
    pub fn empty() -> Self {
        Self {
            faltantes: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub keys_active: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alerta_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Alerta::None).unwrap(), "\"none\"");
        assert_eq!(serde_json::to_string(&Alerta::Red).unwrap(), "\"red\"");
    }

    #[test]
    fn alerta_rejects_unknown_level() {
        assert!(serde_json::from_str::<Alerta>("\"purple\"").is_err());
    }

    #[test]
    fn produto_accepts_integer_quantity() {
        let p: Produto = serde_json::from_str(
            r#"{"id":"1","nome":"Leite","preco_unitario":4.5,"quantidade":2}"#,
        )
        .unwrap();
        assert_eq!(p.quantidade, 2.0);
    }

    #[test]
    fn produto_accepts_decimal_quantity() {
        let p: Produto = serde_json::from_str(
            r#"{"id":"1","nome":"Carne","preco_unitario":39.9,"quantidade":1.5}"#,
        )
        .unwrap();
        assert_eq!(p.quantidade, 1.5);
    }
}
