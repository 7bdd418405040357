//! Prompt templates sent to the LLM.

use crate::domain::HoroscopeRecord;

/// Prompt asking for today's horoscope of `sign` in the labeled layout the
/// parser expects.
pub fn horoscope_prompt(sign: &str) -> String {
    format!(
        "Para o signo de {sign}, gere um horóscopo para o dia de HOJE.
1.  **Descrição:** Crie uma descrição SÉRIA, MADURA e CONCISA (1-2 frases) que soe relevante para as energias astrais de HOJE. Mencione alguma influência planetária real, e evite humor exagerado ou linguagem infantil. A descrição deve ser respeitosa e útil, como encontrada em um horóscopo profissional.

2.  **Dados Adicionais:** Gere os seguintes dados:
    Número da Sorte: [Número inteiro]
    Cor: [Nome da Cor]
    Conselho: [Um conselho diário SÉRIO e REFLEXIVO, que realmente possa ajudar a pessoa. Evite humor, excentricidades ou linguagem informal demais]

3.  **Resumo Final:** Adicione um comentário final com o título 'Resumindo:'.
    -   Esta seção será substituída automaticamente por um resumo rebelde gerado pelo sistema.

Siga EXATAMENTE este formato completo, sem adicionar nada fora do padrão:
Descrição: [Texto sério e conciso sobre HOJE]
Número da Sorte: [Número]
Cor: [Cor]
Conselho: [Conselho sério e maduro]
Resumindo: [Qualquer texto - será substituído]
"
    )
}

/// Prompt asking for a short, foul-mouthed mockery of an already parsed
/// horoscope.
pub fn rebel_summary_prompt(record: &HoroscopeRecord) -> String {
    let lucky = record.lucky_number();
    let advice = record.advice();

    format!(
        "Crie um resumo CURTO, REBELDE e ENGRAÇADO para o seguinte horóscopo SÉRIO:
Descrição: {description}
Número da Sorte: {lucky}
Cor: {color}
Conselho: {advice}

SEU RESUMO DEVE:
1. Ser EXTREMAMENTE REBELDE, SARCÁSTICO e DEBOCHADO
2. Zombar das previsões de forma engraçada, fazendo um contraste forte com o tom sério do horóscopo
3. Ter no máximo 2-3 frases curtas e impactantes
4. Incluir pelo menos um palavrão
5. Mencionar o número da sorte {lucky} de forma irônica
6. Zombar da previsão/conselho como se fossem \"óbvios demais\" ou totalmente inúteis

EXEMPLO de tom (adaptar para o conteúdo real):
\"Número {lucky}? Que merda de sorte é essa? Com esse conselho profundo de '{advice}', você tá mais fodido que peixe no deserto!\"
",
        description = record.description(),
        color = record.color(),
    )
}
