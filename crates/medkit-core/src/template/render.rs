use crate::prompt::RenderedPrompt;
use crate::validate::{InputValue, ValidatedInput};

use super::parse::{Node, Ref};

pub(super) fn render(nodes: &[Node], input: &ValidatedInput) -> RenderedPrompt {
    let mut prompt = RenderedPrompt::new();
    let mut scopes = Vec::new();
    render_nodes(nodes, input, &mut scopes, &mut prompt);
    prompt
}

fn render_nodes<'a>(
    nodes: &'a [Node],
    input: &'a ValidatedInput,
    scopes: &mut Vec<&'a InputValue>,
    prompt: &mut RenderedPrompt,
) {
    for node in nodes {
        match node {
            Node::Text(text) => prompt.push_text(text),
            Node::Scalar { reference, .. } => {
                if let Some(text) = lookup(reference, input, scopes).and_then(InputValue::as_text) {
                    prompt.push_text(&text);
                }
            }
            Node::If { reference, body, .. } => {
                if lookup(reference, input, scopes).is_some_and(InputValue::is_truthy) {
                    render_nodes(body, input, scopes, prompt);
                }
            }
            Node::Each { reference, body, .. } => {
                if let Some(InputValue::List(items)) = lookup(reference, input, scopes) {
                    for item in items {
                        scopes.push(item);
                        render_nodes(body, input, scopes, prompt);
                        scopes.pop();
                    }
                }
            }
            Node::Media { reference, .. } => {
                if let Some(InputValue::Media(media)) = lookup(reference, input, scopes) {
                    prompt.push_media(media.clone());
                }
            }
        }
    }
}

fn lookup<'a>(
    reference: &Ref,
    input: &'a ValidatedInput,
    scopes: &[&'a InputValue],
) -> Option<&'a InputValue> {
    match reference {
        Ref::Field(name) => input.get(name),
        Ref::This => scopes.last().copied(),
        Ref::ThisField(name) => match scopes.last().copied() {
            Some(InputValue::Object(fields)) => fields.get(name),
            _ => None,
        },
    }
}
