use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    errors::{ConvertError, ConvertResult},
    reader::{decode_content, read_records},
    transform::prelude::*,
    types::{AccountType, YnabRow},
    writer::{output_path, write_file},
};

#[derive(Debug, Default)]
pub struct ConverterBuilder {
    content: Option<String>,
    filepath: Option<PathBuf>,
    output: Option<PathBuf>,
    account_type: Option<AccountType>,
    delimiter: Option<u8>,
    skip_lines: usize,
    date_style: DateStyle,
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn filename(mut self, filename: impl AsRef<Path>) -> Self {
        self.filepath = Some(filename.as_ref().to_path_buf());
        self
    }

    /// Overrides the default `<stem>-ynab.csv` output location.
    pub fn output(mut self, output: impl AsRef<Path>) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn account_type(mut self, account_type: AccountType) -> Self {
        self.account_type = Some(account_type);
        self
    }

    /// Input delimiter; detected from the header line when not set.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Lines before the header row (account summary blocks in bank exports).
    pub fn skip_lines(mut self, skip_lines: usize) -> Self {
        self.skip_lines = skip_lines;
        self
    }

    pub fn date_style(mut self, date_style: DateStyle) -> Self {
        self.date_style = date_style;
        self
    }

    fn load_content(&self) -> ConvertResult<String> {
        match (&self.content, &self.filepath) {
            (Some(content), _) => Ok(content.clone()),
            (None, Some(path)) => {
                debug!("reading {}", path.display());
                Ok(decode_content(&fs::read(path)?))
            }
            (None, None) => Err(ConvertError::MissingContentAndFilepath),
        }
    }

    /// Transforms every data row in input order. The first failing row
    /// aborts the conversion.
    pub fn convert(&self) -> ConvertResult<Vec<YnabRow>> {
        let account_type = self.account_type.ok_or(ConvertError::MissingAccountType)?;
        let content = self.load_content()?;
        let records = read_records(&content, self.skip_lines, self.delimiter)?;

        let transformer = RowTransformer::new().with_date_style(self.date_style);

        let rows = records
            .iter()
            .map(|record| {
                let fields: Vec<&str> = record.fields.iter().collect();
                transformer
                    .transform(&fields, account_type)
                    .map_err(|e| e.at_line(record.line))
            })
            .collect::<ConvertResult<Vec<_>>>()?;

        info!("converted {} {account_type} rows", rows.len());
        Ok(rows)
    }

    /// Converts and writes the YNAB file, returning its path. Nothing is
    /// written unless every row converted.
    pub fn convert_file(self) -> ConvertResult<PathBuf> {
        let target = match (&self.output, &self.filepath) {
            (Some(output), _) => output.clone(),
            (None, Some(input)) => output_path(input),
            (None, None) => return Err(ConvertError::MissingOutputPath),
        };

        let rows = self.convert()?;
        write_file(&target, &rows)?;

        info!("wrote {}", target.display());
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SAMPLE_GIROKONTO: &str = "Date;Payee;Memo;Amount\n\
01.02.2023;Supermarket;;-45,67\n\
02.02.2023;Employer;Salary 01/2023;2.000,00\n\
03.02.2023;Landlord;Rent;-1.100,00\n";

    const SAMPLE_VISA: &str = "\"Umsatz abgerechnet und nicht im Saldo enthalten\";\"Wertstellung\";\"Belegdatum\";\"Beschreibung\";\"Betrag (EUR)\";\"Ursprünglicher Betrag\";\n\
\"Ja\";\"05.02.2023\";\"03.02.2023\";\"ONLINE SHOP\";\"25,99\";\"\";\n\
\"Ja\";\"06.02.2023\";\"06.02.2023\";\"Ausgleich Kreditkarte\";\"-25,99\";\"\";\n";

    #[test]
    fn test_builder_new() {
        let builder = ConverterBuilder::new();
        assert!(builder.content.is_none());
        assert!(builder.filepath.is_none());
        assert!(builder.output.is_none());
        assert!(builder.account_type.is_none());
        assert!(builder.delimiter.is_none());
        assert_eq!(builder.skip_lines, 0);
        assert_eq!(builder.date_style, DateStyle::Keep);
    }

    #[test]
    fn test_builder_chaining() {
        let builder = ConverterBuilder::new()
            .content("content")
            .filename("file.csv")
            .output("out.csv")
            .account_type(AccountType::Visa)
            .delimiter(b',')
            .skip_lines(6)
            .date_style(DateStyle::Ynab);

        assert!(builder.content.is_some());
        assert_eq!(builder.filepath.unwrap(), PathBuf::from("file.csv"));
        assert_eq!(builder.output.unwrap(), PathBuf::from("out.csv"));
        assert_eq!(builder.account_type, Some(AccountType::Visa));
        assert_eq!(builder.delimiter, Some(b','));
        assert_eq!(builder.skip_lines, 6);
        assert_eq!(builder.date_style, DateStyle::Ynab);
    }

    #[test]
    fn test_convert_girokonto() {
        let rows = ConverterBuilder::new()
            .content(SAMPLE_GIROKONTO)
            .account_type(AccountType::Girokonto)
            .convert()
            .unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].fields(), ["01.02.2023", "Supermarket", "", "45.67", ""]);
        assert_eq!(rows[1].fields(), ["02.02.2023", "Employer", "Salary 01/2023", "", "2000.00"]);
        assert_eq!(rows[2].fields(), ["03.02.2023", "Landlord", "Rent", "1100.00", ""]);
    }

    #[test]
    fn test_convert_visa() {
        let rows = ConverterBuilder::new()
            .content(SAMPLE_VISA)
            .account_type(AccountType::Visa)
            .date_style(DateStyle::Ynab)
            .convert()
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields(), ["05/02/23", "ONLINE SHOP", "", "25.99", ""]);
        assert_eq!(rows[1].fields(), ["06/02/23", "Ausgleich Kreditkarte", "", "", "25.99"]);
    }

    #[test]
    fn test_convert_reports_line_of_bad_row() {
        let content = "Date;Payee;Memo;Amount\n01.02.2023;A;;1,00\n02.02.2023;B;;12,,00\n";
        let result = ConverterBuilder::new()
            .content(content)
            .account_type(AccountType::Girokonto)
            .convert();

        match result {
            Err(ConvertError::Row { line, source }) => {
                assert_eq!(line, 3);
                assert!(matches!(*source, ConvertError::Format(ref v) if v == "12,,00"));
            }
            other => panic!("expected row error, got {other:?}"),
        }
    }

    #[test]
    fn test_convert_aborts_on_row_of_empty_fields() {
        let content = "Date;Payee;Memo;Amount\n01.02.2023;A;;1,00\n;;;\n02.02.2023;B;;2,00\n";
        let err = ConverterBuilder::new()
            .content(content)
            .account_type(AccountType::Girokonto)
            .convert()
            .unwrap_err();

        assert!(matches!(err, ConvertError::Row { line: 3, .. }));
        assert!(matches!(err.root(), ConvertError::Format(v) if v.is_empty()));
    }

    #[test]
    fn test_convert_schema_error_counts_preamble() {
        let content = "Konto;DE123\n\nDate;Payee;Memo;Amount\n01.02.2023;A;1,00\n";
        let err = ConverterBuilder::new()
            .content(content)
            .skip_lines(2)
            .account_type(AccountType::Girokonto)
            .convert()
            .unwrap_err();

        assert!(matches!(err, ConvertError::Row { line: 4, .. }));
        assert!(matches!(err.root(), ConvertError::Schema { expected: 4, found: 3, .. }));
    }

    #[rstest]
    #[case(ConverterBuilder::new().content(SAMPLE_GIROKONTO), "MissingAccountType")]
    #[case(ConverterBuilder::new().account_type(AccountType::Visa), "MissingContentAndFilepath")]
    fn test_convert_missing_inputs(#[case] builder: ConverterBuilder, #[case] expected: &str) {
        let err = builder.convert().unwrap_err();
        assert_eq!(format!("{err:?}"), expected);
    }

    #[test]
    fn test_convert_file_without_target() {
        let result = ConverterBuilder::new()
            .content(SAMPLE_GIROKONTO)
            .account_type(AccountType::Girokonto)
            .convert_file();

        assert!(matches!(result, Err(ConvertError::MissingOutputPath)));
    }

    #[test]
    fn test_convert_missing_file() {
        let result = ConverterBuilder::new()
            .filename("/definitely/not/here.csv")
            .account_type(AccountType::Girokonto)
            .convert();

        assert!(matches!(result, Err(ConvertError::Io(_))));
    }
}
