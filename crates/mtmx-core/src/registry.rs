//! Message-type to mapper dispatch.

use mtmx_map::{MapContext, MapResult, mt101, mt102, mt103, mt202, mt940, mt9xx};
use mtmx_model::{CanonicalDocument, MessageType};
use mtmx_parse::FieldSet;

/// A semantic mapper: validated fields in, canonical document out.
pub type MapFn = fn(&FieldSet, &MapContext) -> MapResult<CanonicalDocument>;

/// Mapper for `message_type`. Total over the supported set; MT940 and
/// MT950 share a mapper, as do the two confirmation types up to entry
/// direction.
pub fn mapper_for(message_type: MessageType) -> MapFn {
    match message_type {
        MessageType::Mt101 => mt101::map,
        MessageType::Mt102 => mt102::map,
        MessageType::Mt103 => mt103::map,
        MessageType::Mt202 => mt202::map,
        MessageType::Mt900 => mt9xx::map_debit,
        MessageType::Mt910 => mt9xx::map_credit,
        MessageType::Mt940 | MessageType::Mt950 => mt940::map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_a_mapper() {
        // Dispatch is total; this pins the registry against new variants.
        for message_type in MessageType::ALL {
            let _ = mapper_for(message_type);
        }
    }
}
