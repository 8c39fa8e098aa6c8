use crate::libquiz::question::{AnswerOption, BankError, Question, QuestionBank};

macro_rules! question {
    ($text:expr, [$($opt:expr),+ $(,)?]) => {
        Question::new($text, vec![$($opt),+])
    };
}

pub(crate) fn builtin_questions() -> Vec<Question> {
    use AnswerOption as Opt;
    vec![
        question!(
            "What is the capital of France?",
            [
                Opt::incorrect("New York"),
                Opt::incorrect("London"),
                Opt::correct("Paris"),
                Opt::incorrect("Dublin"),
            ]
        ),
        question!(
            "Who is the CEO of Tesla?",
            [
                Opt::incorrect("Jeff Bezos"),
                Opt::correct("Elon Musk"),
                Opt::incorrect("Bill Gates"),
                Opt::incorrect("Tony Stark"),
            ]
        ),
        question!(
            "The iPhone was created by which company?",
            [
                Opt::correct("Apple"),
                Opt::incorrect("Intel"),
                Opt::incorrect("Amazon"),
                Opt::incorrect("Microsoft"),
            ]
        ),
        question!(
            "How many continents are there?",
            [
                Opt::incorrect("5"),
                Opt::incorrect("6"),
                Opt::correct("7"),
                Opt::incorrect("8"),
            ]
        ),
        question!(
            "What is the largest ocean on Earth?",
            [
                Opt::incorrect("Atlantic Ocean"),
                Opt::incorrect("Indian Ocean"),
                Opt::incorrect("Arctic Ocean"),
                Opt::correct("Pacific Ocean"),
            ]
        ),
    ]
}

pub(crate) fn builtin_bank() -> Result<QuestionBank, BankError> {
    QuestionBank::new(builtin_questions())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bank_is_valid() {
        let bank = builtin_bank().unwrap();
        assert_eq!(bank.len(), 5);
        assert!(bank.questions().iter().all(|q| q.options.len() == 4));
    }

    #[test]
    fn builtin_bank_keeps_display_order() {
        let bank = builtin_bank().unwrap();
        let first: Vec<&str> = bank.questions()[0]
            .options
            .iter()
            .map(|opt| opt.text.as_str())
            .collect();
        assert_eq!(first, vec!["New York", "London", "Paris", "Dublin"]);
    }
}
