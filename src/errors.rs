use thiserror::Error;

use crate::types::AccountType;

/// Erros possíveis durante a conversão de extratos para o formato YNAB4
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Tipo de conta fora do conjunto suportado
    #[error("Unsupported account type: {0} (expected GIROKONTO, VISA or GIROKONTO_NEU)")]
    UnsupportedAccountType(String),

    /// Número de colunas da linha não bate com o layout do tipo de conta
    #[error("Unexpected column count for {account_type}: expected {expected}, found {found}")]
    Schema {
        account_type: AccountType,
        expected: usize,
        found: usize,
    },

    /// Valor monetário que não pode ser lido no formato alemão ("1.234,56")
    #[error("Invalid amount format: {0:?}")]
    Format(String),

    /// Data em formato não reconhecido (apenas com `DateStyle::Ynab`)
    #[error("Invalid date format: {0:?}")]
    InvalidDate(String),

    /// Erro de uma linha específica do arquivo (número da linha física, base 1)
    #[error("line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: Box<ConvertError>,
    },

    /// Erro ao ler ou gravar arquivos no disco
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Erro do leitor/escritor CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// O builder foi chamado sem fornecer conteúdo nem caminho de arquivo
    #[error("Content or filepath is required")]
    MissingContentAndFilepath,

    /// Conteúdo em memória sem caminho de saída explícito
    #[error("Output path is required when converting in-memory content")]
    MissingOutputPath,

    /// O builder foi chamado sem tipo de conta
    #[error("Account type is required")]
    MissingAccountType,

    /// Arquivo sem linha de cabeçalho após as linhas de preâmbulo
    #[error("Input has no header row")]
    EmptyInput,
}

impl ConvertError {
    pub(crate) fn at_line(self, line: u64) -> Self {
        ConvertError::Row {
            line,
            source: Box::new(self),
        }
    }

    /// Erro mais interno, sem o contexto de linha
    pub fn root(&self) -> &ConvertError {
        match self {
            ConvertError::Row { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Alias conveniente para Result com nosso tipo de erro principal
pub type ConvertResult<T> = Result<T, ConvertError>;
