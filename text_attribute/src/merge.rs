// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! How writes and removals combine with what a storage slot already holds.
//!
//! Most slots belong to a single attribute, and writing simply overwrites. A slot shared by
//! several attributes that each own part of the value has an entry in [`MERGE_RULES`].

use crate::{Attribute, AttributeKey, AttributeValue, ParagraphStyle, Style};

/// What remains of a stored value after one style is removed from it.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Retract {
    /// The style was not present; leave the run alone.
    Keep,
    /// Nothing remains; clear the run.
    Clear,
    /// Store this value instead.
    Replace(AttributeValue),
}

/// Combination rules for one storage slot.
#[derive(Clone, Copy)]
pub(crate) struct MergeRule {
    pub(crate) key: AttributeKey,
    /// Produces the value to store given the current one (`None` in gaps).
    pub(crate) merge: fn(Option<&AttributeValue>, &Attribute) -> AttributeValue,
    /// Removes `style` from a stored value.
    pub(crate) retract: fn(&AttributeValue, Style) -> Retract,
}

impl core::fmt::Debug for MergeRule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MergeRule")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Slots whose value is composed from several attributes.
pub(crate) static MERGE_RULES: &[MergeRule] = &[MergeRule {
    key: AttributeKey::ParagraphStyle,
    merge: merge_paragraph,
    retract: retract_paragraph,
}];

/// The rule for `key`, or the overwrite rule if `key` has no entry.
pub(crate) fn rule_for(key: AttributeKey) -> MergeRule {
    MERGE_RULES
        .iter()
        .find(|rule| rule.key == key)
        .copied()
        .unwrap_or(MergeRule {
            key,
            merge: overwrite,
            retract: clear,
        })
}

fn overwrite(_: Option<&AttributeValue>, attribute: &Attribute) -> AttributeValue {
    attribute.value()
}

fn clear(_: &AttributeValue, _: Style) -> Retract {
    Retract::Clear
}

fn merge_paragraph(current: Option<&AttributeValue>, attribute: &Attribute) -> AttributeValue {
    let mut style = current
        .and_then(AttributeValue::as_paragraph_style)
        .copied()
        .unwrap_or_default();
    style.apply(attribute);
    AttributeValue::ParagraphStyle(style)
}

fn retract_paragraph(current: &AttributeValue, style: Style) -> Retract {
    let Some(existing) = current.as_paragraph_style() else {
        return Retract::Clear;
    };
    let mut remaining: ParagraphStyle = *existing;
    remaining.reset(style);
    if remaining.is_default() {
        Retract::Clear
    } else if remaining == *existing {
        Retract::Keep
    } else {
        Retract::Replace(AttributeValue::ParagraphStyle(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::{Retract, rule_for};
    use crate::values::TextAlignment;
    use crate::{Attribute, AttributeKey, AttributeValue, ParagraphStyle, Style};

    #[test]
    fn unlisted_keys_overwrite() {
        let rule = rule_for(AttributeKey::Kern);
        let old = AttributeValue::Float(1.0);
        assert_eq!(
            (rule.merge)(Some(&old), &Attribute::Kern(2.0)),
            AttributeValue::Float(2.0)
        );
        assert_eq!((rule.retract)(&old, Style::Kern), Retract::Clear);
    }

    #[test]
    fn paragraph_fields_compose() {
        let rule = rule_for(AttributeKey::ParagraphStyle);
        let spaced = (rule.merge)(None, &Attribute::LineSpacing(10.0));
        let both = (rule.merge)(Some(&spaced), &Attribute::TextAlignment(TextAlignment::Center));
        let expected = ParagraphStyle {
            line_spacing: 10.0,
            alignment: TextAlignment::Center,
            ..ParagraphStyle::default()
        };
        assert_eq!(both, AttributeValue::ParagraphStyle(expected));

        assert_eq!(
            (rule.retract)(&both, Style::LineSpacing),
            Retract::Replace(AttributeValue::ParagraphStyle(ParagraphStyle {
                alignment: TextAlignment::Center,
                ..ParagraphStyle::default()
            }))
        );
        assert_eq!((rule.retract)(&spaced, Style::LineSpacing), Retract::Clear);
        assert_eq!((rule.retract)(&spaced, Style::LineBreakMode), Retract::Keep);
    }
}
