//! Integration tests for texlabel label inference and insertion

use pretty_assertions::assert_eq;
use texlabel::{
    apply_edits, compose, locate, plan_insertions, slugify, Insertion, LabelContext,
    LabelOptions, LabelResult, Selection,
};

const PAPER: &str = r"\documentclass{article}
\begin{document}
\chapter{Einführung}
Some text.
\section[Short]{Related Work: Prior Art}

\begin{figure}[ht]
  \includegraphics{plot.pdf}
  \caption{Loss über Zeit}
\end{figure}
\begin{table}
  \caption[LoT]{Größen}
  \begin{tabular}{ll}
  \end{tabular}
\end{table}
\end{document}
";

/// Position at the end of the first line containing `needle`.
fn end_of_line_with(text: &str, needle: &str) -> usize {
    let start = text.find(needle).expect("needle present");
    start + text[start..].find('\n').unwrap_or(text.len() - start)
}

// ============================================================================
// Slugs
// ============================================================================

mod slugs {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_documented_examples() {
        assert_eq!(slugify("Hello World"), "hello_world");
        assert_eq!(slugify("Über uns"), "ueber_uns");
        assert_eq!(slugify("A--B"), "a_b");
    }

    proptest! {
        #[test]
        fn never_double_underscore(s in "\\PC*") {
            prop_assert!(!slugify(&s).contains("__"));
        }

        #[test]
        fn output_alphabet(s in "\\PC*") {
            prop_assert!(slugify(&s)
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_'));
        }

        #[test]
        fn idempotent_on_slugs(s in "[a-z0-9_]*") {
            let once = slugify(&s);
            prop_assert_eq!(slugify(&once), once.clone());
        }
    }
}

// ============================================================================
// Locating the labelled command
// ============================================================================

mod locating {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_chapter_with_umlaut() {
        let pos = end_of_line_with(PAPER, "\\chapter");
        assert_eq!(locate(PAPER, pos), LabelContext::new("cha", "einfuehrung"));
    }

    #[test]
    fn test_section_with_short_title() {
        let pos = end_of_line_with(PAPER, "\\section");
        assert_eq!(
            locate(PAPER, pos),
            LabelContext::new("sec", "related_work_prior_art")
        );
    }

    #[test]
    fn test_line_after_section() {
        // Cursor on the blank line below the section heading.
        let pos = end_of_line_with(PAPER, "\\section") + 1;
        assert_eq!(locate(PAPER, pos).label_type, "sec");
    }

    #[test]
    fn test_figure_caption() {
        let pos = end_of_line_with(PAPER, "\\caption{Loss");
        assert_eq!(
            locate(PAPER, pos),
            LabelContext::new("fig", "loss_ueber_zeit")
        );
    }

    #[test]
    fn test_table_caption_before_tabular() {
        // The first \end after the caption closes the tabular.
        let pos = end_of_line_with(PAPER, "\\caption[LoT]");
        assert_eq!(locate(PAPER, pos), LabelContext::new("???", "groessen"));
    }

    #[test]
    fn test_nothing_nearby() {
        let pos = end_of_line_with(PAPER, "\\end{tabular}");
        assert_eq!(locate(PAPER, pos), LabelContext::new("???", "label"));
    }

    #[test]
    fn test_position_past_end_is_clamped() {
        let text = "\\section{Tail}";
        assert_eq!(locate(text, 1000), LabelContext::new("sec", "tail"));
    }
}

// ============================================================================
// Composing labels
// ============================================================================

mod composing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_end_to_end_single_cursor() {
        let text = "\\section{Foo Bar}\n";
        let edits = plan_insertions(text, &[Selection::point(17)], &LabelOptions::new()).unwrap();
        match &edits[0].insertion {
            Insertion::Snippet(snippet) => {
                assert_eq!(snippet.to_template(), "\\\\label{${1:sec}:${2:foo_bar}}$0");
                assert_eq!(snippet.expand(), "\\label{sec:foo_bar}");
            }
            other => panic!("expected a snippet, got {:?}", other),
        }
    }

    #[test]
    fn test_affix_variants() {
        let base = "\\subsection{Setup}\n";
        let cases = [
            ("", "\\label{", "}"),
            ("\\label", "{", "}"),
            ("\\label{", "", ""),
        ];
        for (typed, before, after) in cases {
            let text = format!("{}{}", base, typed);
            let result = compose(text.as_str(), text.len());
            assert_eq!(
                result,
                LabelResult {
                    label_type: "sub".to_string(),
                    label_content: "setup".to_string(),
                    before_text: before.to_string(),
                    after_text: after.to_string(),
                },
                "typed {:?}",
                typed
            );
        }
    }

    #[test]
    fn test_multi_cursor_batch() {
        let text = "\\section{One}\n\n\\section{Two}\n\n";
        let first = end_of_line_with(text, "{One}");
        let second = end_of_line_with(text, "{Two}");
        let selections = [Selection::point(second), Selection::point(first)];
        let edits = plan_insertions(text, &selections, &LabelOptions::new()).unwrap();
        assert!(edits
            .iter()
            .all(|e| matches!(e.insertion, Insertion::Text(_))));
        assert_eq!(
            apply_edits(text, &edits),
            "\\section{One}\\label{sec:one}\n\n\\section{Two}\\label{sec:two}\n\n"
        );
    }

    #[test]
    fn test_serialized_shape() {
        let result = compose("\\paragraph{P}", 13);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "label_type": "par",
                "label_content": "p",
                "before_text": "\\label{",
                "after_text": "}",
            })
        );

        let edits = plan_insertions("\\part{X}", &[Selection::point(8)], &LabelOptions::plain_text())
            .unwrap();
        let json = serde_json::to_value(&edits[0]).unwrap();
        assert_eq!(json["range"], serde_json::json!({"start": 8, "end": 8}));
        assert_eq!(
            json["insertion"],
            serde_json::json!({"kind": "text", "value": "\\label{part:x}"})
        );
    }

    #[test]
    fn test_options_from_partial_json() {
        let opts: LabelOptions =
            serde_json::from_str(r#"{"placeholder_type": "todo", "style": "plain-text"}"#).unwrap();
        assert_eq!(opts.placeholder_type, "todo");
        assert_eq!(opts.placeholder_content, "label");
        let edits = plan_insertions("text", &[Selection::point(4)], &opts).unwrap();
        assert_eq!(
            edits[0].insertion,
            Insertion::Text("\\label{todo:label}".to_string())
        );
    }
}
