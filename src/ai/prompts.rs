//! Prompt builders for the four assistant tasks.
//!
//! Each builder is a pure function: it serializes the caller's data
//! compactly, attaches the fixed task rules and spells out the exact JSON
//! shape the model must answer with. The prompt text is the only schema
//! enforcement there is, so every builder forbids markdown and prose
//! around the JSON.

use crate::contracts::Produto;

/// Prompt for the price/budget risk analysis of a shopping list.
pub fn analysis_prompt(produtos: &[Produto], orcamento_total: f64) -> String {
    let lista_json = serde_json::to_string(produtos).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Atue como um assistente de economia doméstica especialista.\n\
         Analise a seguinte lista de compras e o orçamento total de R$ {orcamento_total:.2}.\n\
         \n\
         Lista: {lista_json}\n\
         \n\
         Regras de Análise:\n\
         1. Identifique produtos com preço unitário suspeito (muito caro para a média de mercado brasileiro).\n\
         2. Identifique produtos supérfluos se o orçamento estiver apertado (gasto total > 80% do orçamento).\n\
         3. Identifique erros de quantidade (ex: 100 caixas de leite pode ser erro de digitação).\n\
         \n\
         Saída OBRIGATÓRIA: Retorne APENAS um JSON puro (sem markdown ```json) com uma lista de objetos.\n\
         Cada objeto deve ter exatamente este formato:\n\
         {{\"id\": \"id_do_produto_original\", \"alerta\": \"nivel_de_alerta\", \"feedback\": \"mensagem curta e direta\"}}\n\
         \n\
         Níveis de alerta:\n\
         - \"none\": Produto ok, preço justo, essencial.\n\
         - \"yellow\": Atenção leve (ex: pouco essencial ou preço levemente alto).\n\
         - \"orange\": Cuidado (ex: item supérfluo com orçamento apertado).\n\
         - \"red\": Crítico (ex: preço absurdo, erro de digitação provável, estoura o orçamento sozinho)."
    )
}

/// Prompt asking for a single recipe built from the given ingredients.
pub fn recipe_prompt(ingredientes: &[String], tipo_refeicao: &str) -> String {
    let lista_json = serde_json::to_string(ingredientes).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Atue como um chef de cozinha brasileiro prático.\n\
         Sugira UMA receita de {tipo_refeicao} usando principalmente estes ingredientes: {lista_json}.\n\
         \n\
         Regras:\n\
         1. Use os ingredientes da lista; itens básicos de despensa (sal, óleo, água) podem ser assumidos.\n\
         2. A receita deve ser simples, com modo de preparo em poucos passos.\n\
         3. Não use formatação markdown nem texto de conversa fora do JSON.\n\
         \n\
         Saída OBRIGATÓRIA: Retorne APENAS um JSON puro (sem markdown ```json) com UM único objeto neste formato:\n\
         {{\"titulo\": \"nome da receita\", \"receita_texto\": \"ingredientes e modo de preparo em texto corrido\"}}"
    )
}

/// Prompt asking for up to three items that complement the planned list.
pub fn complements_prompt(itens_lista: &[String]) -> String {
    let lista_json = serde_json::to_string(itens_lista).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Atue como um assistente de compras de supermercado.\n\
         O cliente planeja comprar estes itens: {lista_json}.\n\
         \n\
         Regras:\n\
         1. Sugira no máximo 3 itens que combinam com itens da lista (ex: café -> filtro de café).\n\
         2. Cada sugestão deve apontar o item da lista que a motivou.\n\
         3. Se nada fizer sentido, retorne uma lista vazia.\n\
         \n\
         Saída OBRIGATÓRIA: Retorne APENAS um JSON puro (sem markdown ```json) com uma lista de 0 a 3 objetos.\n\
         Cada objeto deve ter exatamente este formato:\n\
         {{\"item_base\": \"item da lista original\", \"sugestao\": \"item sugerido\", \"motivo\": \"justificativa curta\"}}"
    )
}

/// Prompt asking which planned items are still missing from the cart.
pub fn checklist_prompt(lista_planejada: &[String], itens_carrinho: &[String]) -> String {
    let planejada_json =
        serde_json::to_string(lista_planejada).unwrap_or_else(|_| "[]".to_string());
    let carrinho_json = serde_json::to_string(itens_carrinho).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Atue como um conferente de compras.\n\
         Lista planejada: {planejada_json}\n\
         Itens já no carrinho: {carrinho_json}\n\
         \n\
         Regras:\n\
         1. Compare por significado, não por texto idêntico (ex: \"Leite integral\" no carrinho cobre \"Leite\" na lista).\n\
         2. Retorne os itens da lista planejada que ainda NÃO estão no carrinho, com o nome exato da lista planejada.\n\
         3. Se nada faltar, retorne uma lista vazia.\n\
         \n\
         Saída OBRIGATÓRIA: Retorne APENAS um JSON puro (sem markdown ```json) com uma lista de strings, ex: [\"Feijão\"]"
    )
}
