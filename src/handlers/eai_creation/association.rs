//! Attaching the EntityAddressInfo to the managed object.

use tracing::{debug, error};

use crate::dps::{Bucket, DpsError, RemotePersistenceService};
use crate::handlers::{HandlerError, Result};

const GET_MO_FAILURE_MSG: &str = "No MO exists with FDN: ";
const EAI_SET_ON_MO_FAILURE_MSG: &str = "Failed to set EAI on MO: ";

/// Read the MO at `fdn` and point its EntityAddressInfo at `eai_id`.
pub(crate) fn set_entity_address_info(
    dps: &dyn RemotePersistenceService,
    fdn: &str,
    eai_id: i64,
) -> Result<()> {
    let mo = dps
        .get_mo(&Bucket::Live, fdn)
        .map_err(|source| association_failed(fdn, source))?
        .ok_or_else(|| {
            error!(fdn = %fdn, "No MO exists with FDN");
            HandlerError::NotFound {
                fdn: fdn.to_string(),
                message: format!("{}{}", GET_MO_FAILURE_MSG, fdn),
            }
        })?;

    dps.set_entity_address_info(&Bucket::Live, mo.po_id, eai_id)
        .map_err(|source| association_failed(fdn, source))?;

    debug!(fdn = %fdn, mo_id = mo.po_id, eai_id, "Successfully set EAI on MO");
    Ok(())
}

fn association_failed(fdn: &str, source: DpsError) -> HandlerError {
    error!(fdn = %fdn, error = %source, "Failed to set EAI on MO");
    HandlerError::Association {
        fdn: fdn.to_string(),
        message: format!("{}{}", EAI_SET_ON_MO_FAILURE_MSG, fdn),
        source,
    }
}
