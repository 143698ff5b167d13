//! Splitting a network into equal-size subnets.
//!
//! Derives the minimal number of extra prefix bits for a requested subnet
//! count and enumerates the resulting blocks in address order.

use crate::error::SubnetError;
use crate::models::{ip_after_subnet, Ipv4, SubnetPlan, MAX_LENGTH};

/// Most bits a single split may borrow (65 536 subnets). Reports enumerate
/// every subnet, so requests past this fail instead of running away.
pub const MAX_SPLIT_BITS: u8 = 16;

/// Minimal number of bits `b` such that `2^b >= n`. Zero and one subnet
/// both need no extra bits.
pub fn bits_for_subnets(n: u64) -> u8 {
    if n <= 1 {
        0
    } else {
        (64 - (n - 1).leading_zeros()) as u8
    }
}

/// Build the split plan for `requested` subnets of `base`.
///
/// `base` may carry host bits; the plan is computed from its network
/// address. Fails when the new prefix would pass /32, or when the request
/// is beyond [`MAX_SPLIT_BITS`].
pub fn plan_split(base: Ipv4, requested: u64) -> Result<SubnetPlan, SubnetError> {
    let network = base.normalized();
    let additional_bits = bits_for_subnets(requested);

    let needed = network.mask as u16 + additional_bits as u16;
    if needed > MAX_LENGTH as u16 {
        return Err(SubnetError::AddressSpaceExhausted {
            prefix: network.mask,
            requested,
            needed,
        });
    }
    if additional_bits > MAX_SPLIT_BITS {
        return Err(SubnetError::SplitTooLarge {
            requested,
            max: 1u64 << MAX_SPLIT_BITS,
        });
    }

    let plan = SubnetPlan {
        network,
        additional_bits,
        subnet_mask: network.mask + additional_bits,
        subnet_count: 1u64 << additional_bits,
    };
    log::debug!("planned split: {plan}");
    Ok(plan)
}

/// Enumerate the plan's subnets in increasing address order.
///
/// The i-th base address is the network address plus `i` subnet sizes. For
/// a degenerate plan this is the original network, unchanged.
pub fn enumerate_subnets(plan: &SubnetPlan) -> Result<Vec<Ipv4>, SubnetError> {
    let count = plan.subnet_count as usize;
    let mut subnets = Vec::with_capacity(count);
    let mut current = plan.network.network_address();
    for i in 0..count {
        subnets.push(Ipv4 {
            addr: current,
            mask: plan.subnet_mask,
        });
        // The block after the last one may not exist (e.g. 255.255.255.255).
        if i + 1 < count {
            current = ip_after_subnet(current, plan.subnet_mask)?;
        }
    }
    Ok(subnets)
}
