use plaintext_matcher::{
    read_extraction_rows, resolve_question_answers, tokenize, write_resolved_rows, Error,
};

#[cfg(test)]
mod extraction_csv_tests {
    use super::*;

    fn invalid_argument_message(csv: &str) -> String {
        match read_extraction_rows(csv.as_bytes()) {
            Err(Error::InvalidArgument(message)) => message,
            other => panic!("Expected an invalid argument error, got {:?}", other),
        }
    }

    #[test]
    fn test_reads_and_groups_rows_by_label() {
        let csv = "question_label,extracted_text\n\
                   q1,We agree\n\
                   q2,\n\
                   q1,\"Yes, mostly\"\n";
        let question_answers = read_extraction_rows(csv.as_bytes()).unwrap();

        assert_eq!(question_answers.len(), 2);
        assert_eq!(question_answers[0].question_label, "q1");
        assert_eq!(
            question_answers[0].extracted_text,
            vec!["We agree".to_string(), "Yes, mostly".to_string()]
        );
        assert_eq!(question_answers[1].question_label, "q2");
        assert!(question_answers[1].extracted_text.is_empty());
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let csv = "extracted_text,question_label\nWe agree,q1\n";
        let question_answers = read_extraction_rows(csv.as_bytes()).unwrap();
        assert_eq!(question_answers[0].question_label, "q1");
        assert_eq!(question_answers[0].extracted_text, vec!["We agree"]);
    }

    #[test]
    fn test_rejects_padded_headers() {
        let message = invalid_argument_message("question_label, extracted_text\nq1,x\n");
        assert!(message.contains("leading or trailing whitespace"), "{}", message);
    }

    #[test]
    fn test_rejects_missing_columns() {
        let message = invalid_argument_message("question_label\nq1\n");
        assert_eq!(message, "Missing required columns: extracted_text.");
    }

    #[test]
    fn test_rejects_extra_columns() {
        let message =
            invalid_argument_message("question_label,extracted_text,score,notes\nq1,x,1,n\n");
        assert_eq!(
            message,
            "Unexpected extra columns present: notes, score. Only extracted_text, question_label are allowed."
        );
    }

    #[test]
    fn test_rejects_duplicate_columns() {
        let message = invalid_argument_message(
            "question_label,question_label,extracted_text\nq1,q2,We agree\n",
        );
        assert_eq!(message, "Duplicate columns present: question_label.");
    }

    #[test]
    fn test_whitespace_only_extraction_is_skipped() {
        let csv = "question_label,extracted_text\nq1,Agreed.\nq2,\"  \"\nq3,  Yes.  \n";
        let question_answers = read_extraction_rows(csv.as_bytes()).unwrap();

        assert_eq!(question_answers.len(), 3);
        assert_eq!(question_answers[0].extracted_text, vec!["Agreed."]);
        assert!(question_answers[1].extracted_text.is_empty());
        assert_eq!(question_answers[2].extracted_text, vec!["Yes."]);

        let source = tokenize("Yes.\nAgreed.");
        let resolved = resolve_question_answers(&source, &question_answers).unwrap();
        assert_eq!(resolved[0].extractions[0].score, 1.0);
        assert!(resolved[1].extractions.is_empty());
        assert_eq!(resolved[2].extractions[0].matched_text, "Yes.");
    }

    #[test]
    fn test_similarity_scores_are_written_as_decimals() {
        let source = tokenize("one two three four five");
        let question_answers = read_extraction_rows(
            "question_label,extracted_text\nq1,one two three nine\n".as_bytes(),
        )
        .unwrap();
        let resolved = resolve_question_answers(&source, &question_answers).unwrap();

        let mut output = Vec::new();
        write_resolved_rows(&mut output, &resolved).unwrap();
        let output = String::from_utf8(output).unwrap();
        let score = output.lines().nth(1).unwrap().split(',').nth(3).unwrap();
        assert!(score.contains('.'), "score column was {:?}", score);
    }

    #[test]
    fn test_rejects_empty_label() {
        let message = invalid_argument_message("question_label,extracted_text\n,x\n");
        assert!(message.contains("empty question_label"), "{}", message);
    }

    #[test]
    fn test_ragged_rows_are_csv_errors() {
        let result = read_extraction_rows("question_label,extracted_text\nq1,a,b\n".as_bytes());
        assert!(matches!(result, Err(Error::CsvError(_))));
    }

    #[test]
    fn test_writes_resolved_rows() {
        let source = tokenize("We agree with   the plan.");
        let csv = "question_label,extracted_text\nq1,agree with the\nq1,this is far too long to match\n";
        let question_answers = read_extraction_rows(csv.as_bytes()).unwrap();
        let resolved = resolve_question_answers(&source, &question_answers).unwrap();

        let mut output = Vec::new();
        write_resolved_rows(&mut output, &resolved).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(
            output,
            "question_label,original_extracted_text,extracted_text,extracted_text_similarity,start,end\n\
             q1,agree with the,agree with the,1.0,2,7\n\
             q1,this is far too long to match,,0.0,,\n"
        );
    }
}
