pub mod analysis;
pub mod checklist;
pub mod complements;
pub mod recipe;

pub use analysis::analisar_compras;
pub use checklist::conferir_carrinho;
pub use complements::sugerir_complementos;
pub use recipe::sugerir_receita;
