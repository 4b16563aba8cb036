// src/pipeline/lookup.rs

//! Interactive lookup: search, pick a result, build its embed link, open it.

use std::io::{self, BufRead, Write};

use crate::error::Result;
use crate::models::{EmbedConfig, SearchResult};
use crate::services::{Launcher, SearchSource, launch};

/// Choices that can be made up front instead of at a prompt.
#[derive(Debug, Clone, Default)]
pub struct LookupOptions {
    /// Query to search for; prompted when absent
    pub query: Option<String>,

    /// Whether to open the link; prompted when absent
    pub open: Option<bool>,
}

/// What a completed lookup produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOutcome {
    pub selected: SearchResult,
    pub url: String,
    /// The user asked for the link to be opened
    pub confirmed: bool,
}

/// Run one lookup against `input`/`output`.
///
/// Returns `Ok(None)` when the search found nothing. A choice that is not a
/// listed number is returned as an error and ends the run.
pub async fn run_lookup<R, W>(
    source: &dyn SearchSource,
    embed: &EmbedConfig,
    launcher: &dyn Launcher,
    options: &LookupOptions,
    input: &mut R,
    output: &mut W,
) -> Result<Option<LookupOutcome>>
where
    R: BufRead,
    W: Write,
{
    let query = match &options.query {
        Some(query) => query.clone(),
        None => prompt(
            input,
            output,
            "Enter the name of the show or movie you want to search for: ",
        )?,
    };

    let results = source.search(&query).await?;

    if results.is_empty() {
        writeln!(output, "No results found.")?;
        return Ok(None);
    }

    writeln!(output, "\nSearch Results:")?;
    for (i, result) in results.iter().enumerate() {
        writeln!(output, "{}. {} (IMDb ID: {})", i + 1, result.title, result.id)?;
    }

    let choice = prompt(
        input,
        output,
        "\nEnter the number of the show/movie you want to watch: ",
    )?;
    let selected = results.select_input(&choice)?.clone();

    writeln!(output, "\nYou selected: {}", selected.title)?;
    writeln!(output, "IMDb ID: {}", selected.id)?;

    let url = embed.target_url(&selected.id);
    writeln!(output, "\nVidSrc URL: {url}")?;

    let confirm = match options.open {
        Some(open) => open,
        None => {
            let answer = prompt(
                input,
                output,
                "Do you want to open this URL in your browser? (y/n): ",
            )?;
            answer.to_lowercase() == "y"
        }
    };

    launch(launcher, &url, confirm);

    Ok(Some(LookupOutcome {
        selected,
        url,
        confirmed: confirm,
    }))
}

/// Print a prompt and read one line without its line ending.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed at prompt").into());
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use async_trait::async_trait;

    use super::*;
    use crate::error::AppError;
    use crate::models::{ResultSet, SearchConfig};
    use crate::services::{RecordingLauncher, ResultExtractor, SelectorExtractor};

    const INCEPTION_PAGE: &str = r#"
        <table class="findList">
          <tr class="findResult odd">
            <td class="result_text"><a href="/title/tt1375666/?ref_=fn_al_tt_1">Inception</a> (2010)</td>
          </tr>
        </table>
    "#;

    const TWO_RESULTS_PAGE: &str = r#"
        <table class="findList">
          <tr class="findResult odd">
            <td class="result_text"><a href="/title/tt0111161/?ref_=fn_al_tt_1">The Shawshank Redemption</a> (1994)</td>
          </tr>
          <tr class="findResult even">
            <td class="result_text"><a href="/title/tt0068646/?ref_=fn_al_tt_2">The Godfather</a> (1972)</td>
          </tr>
        </table>
    "#;

    /// Serves a fixed page through the real extractor.
    struct FixtureSource {
        page: &'static str,
    }

    #[async_trait]
    impl SearchSource for FixtureSource {
        async fn search(&self, _query: &str) -> Result<ResultSet> {
            SelectorExtractor::new(&SearchConfig::default())?.extract(self.page)
        }
    }

    async fn run(
        page: &'static str,
        options: LookupOptions,
        stdin: &str,
        launcher: &RecordingLauncher,
    ) -> (Result<Option<LookupOutcome>>, String) {
        let source = FixtureSource { page };
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = run_lookup(
            &source,
            &EmbedConfig::default(),
            launcher,
            &options,
            &mut input,
            &mut output,
        )
        .await;
        (result, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn test_inception_end_to_end() {
        let launcher = RecordingLauncher::default();
        let (result, output) = run(
            INCEPTION_PAGE,
            LookupOptions::default(),
            "Inception\n1\ny\n",
            &launcher,
        )
        .await;

        let outcome = result.unwrap().unwrap();
        assert_eq!(outcome.selected.id, "tt1375666");
        assert_eq!(outcome.url, "https://vidsrc.cc/v2/embed/movie/tt1375666");
        assert!(outcome.confirmed);
        assert_eq!(*launcher.opened.borrow(), vec![outcome.url.clone()]);

        assert!(output.contains("1. Inception (2010) (IMDb ID: tt1375666)"));
        assert!(output.contains("You selected: Inception (2010)"));
        assert!(output.contains("VidSrc URL: https://vidsrc.cc/v2/embed/movie/tt1375666"));
    }

    #[tokio::test]
    async fn test_empty_results_stop_without_prompting() {
        let launcher = RecordingLauncher::default();
        let (result, output) = run(
            "<html><body></body></html>",
            LookupOptions::default(),
            "nothing\n",
            &launcher,
        )
        .await;

        assert!(result.unwrap().is_none());
        assert!(output.ends_with("No results found.\n"));
        assert!(!output.contains("Enter the number"));
        assert!(launcher.opened.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_declining_does_not_open() {
        let launcher = RecordingLauncher::default();
        let (result, _) = run(TWO_RESULTS_PAGE, LookupOptions::default(), "godfather\n2\nN\n", &launcher).await;

        let outcome = result.unwrap().unwrap();
        assert_eq!(outcome.selected.title, "The Godfather (1972)");
        assert!(!outcome.confirmed);
        assert!(launcher.opened.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_uppercase_yes_opens() {
        let launcher = RecordingLauncher::default();
        let (result, _) = run(TWO_RESULTS_PAGE, LookupOptions::default(), "x\n1\nY\n", &launcher).await;
        assert!(result.unwrap().unwrap().confirmed);
        assert_eq!(launcher.opened.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_preset_options_skip_prompts() {
        let launcher = RecordingLauncher::default();
        let options = LookupOptions {
            query: Some("Inception".to_string()),
            open: Some(false),
        };
        let (result, output) = run(INCEPTION_PAGE, options, "1\n", &launcher).await;

        assert_eq!(result.unwrap().unwrap().selected.id, "tt1375666");
        assert!(!output.contains("search for:"));
        assert!(!output.contains("(y/n)"));
        assert!(launcher.opened.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_out_of_range_choice_fails() {
        let launcher = RecordingLauncher::default();
        let (result, output) = run(TWO_RESULTS_PAGE, LookupOptions::default(), "x\n3\n", &launcher).await;

        assert!(matches!(result, Err(AppError::Selection(_))));
        assert!(!output.contains("VidSrc URL"));
        assert!(launcher.opened.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_non_numeric_choice_fails() {
        let launcher = RecordingLauncher::default();
        let (result, _) = run(TWO_RESULTS_PAGE, LookupOptions::default(), "x\nfirst\n", &launcher).await;
        assert!(matches!(result, Err(AppError::Selection(_))));
    }

    #[tokio::test]
    async fn test_answer_with_leading_space_does_not_open() {
        let launcher = RecordingLauncher::default();
        let (result, _) = run(INCEPTION_PAGE, LookupOptions::default(), "Inception\r\n1\r\n y\r\n", &launcher).await;

        assert!(!result.unwrap().unwrap().confirmed);
        assert!(launcher.opened.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_closed_input_at_query_prompt_fails() {
        let launcher = RecordingLauncher::default();
        let (result, output) = run(INCEPTION_PAGE, LookupOptions::default(), "", &launcher).await;

        assert!(matches!(
            result,
            Err(AppError::Io(ref e)) if e.kind() == io::ErrorKind::UnexpectedEof
        ));
        assert!(!output.contains("Search Results"));
    }

    #[tokio::test]
    async fn test_closed_input_at_choice_prompt_fails() {
        let launcher = RecordingLauncher::default();
        let (result, _) = run(INCEPTION_PAGE, LookupOptions::default(), "Inception\n", &launcher).await;
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
