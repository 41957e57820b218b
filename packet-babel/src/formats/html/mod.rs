//! HTML serialization (Packet -> standalone HTML document)
//!
//! Produces a complete HTML5 document with a small embedded stylesheet:
//! tossups as numbered question/answer blocks, bonuses as a leadin followed
//! by per-part value/question/answer blocks. Styled fields are rendered
//! through the model's nested-markup serializer; escaping the text against
//! markup injection is the hosting surface's concern.

use packet_parser::packet::ast::{Bonus, Packet, Tossup};

use crate::error::FormatError;
use crate::format::Compiler;

const STYLESHEET: &str = "\
body { font-family: Georgia, serif; max-width: 48rem; margin: 2rem auto; }
h2 { border-bottom: 1px solid #999; }
.question { margin-bottom: 0.25rem; }
.answer { margin-top: 0; color: #222; }
.number, .part-value { font-weight: bold; }
";

pub struct HtmlCompiler;

impl Compiler for HtmlCompiler {
    fn name(&self) -> &str {
        "html"
    }

    fn compile(&self, packet: &Packet) -> Result<String, FormatError> {
        Ok(compile_html(packet))
    }
}

/// Build the HTML document for a packet.
pub fn compile_html(packet: &Packet) -> String {
    let mut body = String::new();

    body.push_str("<section class=\"tossups\">\n<h2>Tossups</h2>\n");
    for tossup in &packet.tossups {
        write_tossup(&mut body, tossup);
    }
    body.push_str("</section>\n");

    if let Some(bonuses) = &packet.bonuses {
        body.push_str("<section class=\"bonuses\">\n<h2>Bonuses</h2>\n");
        for bonus in bonuses {
            write_bonus(&mut body, bonus);
        }
        body.push_str("</section>\n");
    }

    wrap_in_document(&body)
}

fn write_tossup(out: &mut String, tossup: &Tossup) {
    out.push_str("<div class=\"tossup\">\n");
    out.push_str(&format!(
        "<p class=\"question\"><span class=\"number\">{}.</span> {}</p>\n",
        tossup.number,
        tossup.question.prompt.to_markup()
    ));
    out.push_str(&format!(
        "<p class=\"answer\">ANSWER: {}</p>\n",
        tossup.question.answer.to_markup()
    ));
    out.push_str("</div>\n");
}

fn write_bonus(out: &mut String, bonus: &Bonus) {
    out.push_str("<div class=\"bonus\">\n");
    out.push_str(&format!(
        "<p class=\"leadin\"><span class=\"number\">{}.</span> {}</p>\n",
        bonus.number,
        bonus.leadin.to_markup()
    ));
    for part in &bonus.parts {
        out.push_str(&format!(
            "<p class=\"question\"><span class=\"part-value\">[{}]</span> {}</p>\n",
            part.value,
            part.question.prompt.to_markup()
        ));
        out.push_str(&format!(
            "<p class=\"answer\">ANSWER: {}</p>\n",
            part.question.answer.to_markup()
        ));
    }
    out.push_str("</div>\n");
}

/// Wrap the rendered body in a complete HTML document with the stylesheet.
fn wrap_in_document(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Packet</title>\n<style>\n{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        STYLESHEET, body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use packet_parser::packet::ast::{BonusPart, Question};
    use packet_parser::packet::style::StyledText;

    fn question(prompt: &str, answer: &str) -> Question {
        Question::new(StyledText::from(prompt), StyledText::from(answer))
    }

    #[test]
    fn test_document_structure() {
        let packet = Packet::new(
            vec![Tossup::new(1, question("A prompt.", "an answer"))],
            Some(vec![Bonus::new(
                1,
                StyledText::from("A leadin."),
                vec![BonusPart::new(question("A part.", "part answer"), 10, None)],
            )]),
        );
        let html = compile_html(&packet);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h2>Tossups</h2>"));
        assert!(html.contains("<h2>Bonuses</h2>"));
        assert!(html.contains("ANSWER: an answer"));
        assert!(html.contains("<span class=\"part-value\">[10]</span> A part."));
    }

    #[test]
    fn test_no_bonus_section_when_absent() {
        let packet = Packet::new(vec![Tossup::new(1, question("q", "a"))], None);
        let html = compile_html(&packet);
        assert!(!html.contains("<h2>Bonuses</h2>"));
    }
}
