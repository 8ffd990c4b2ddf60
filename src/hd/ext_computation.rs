use super::{ExtComputationContext, SceneDelegate};
use crate::sdf;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A data source holding a legacy ext computation.
///
/// The token is a plain value: prim identity plus delegate reference, with no
/// result storage. The execution engine reconstructs and re-invokes it freely;
/// any side effects of invocation belong to the delegate.
pub struct ExtComputationCallbackDataSource {
	id: sdf::Path,
	scene_delegate: Arc<dyn SceneDelegate>,
}

pub type ExtComputationCallbackDataSourceHandle = Arc<ExtComputationCallbackDataSource>;

impl ExtComputationCallbackDataSource {
	pub fn new(id: sdf::Path, scene_delegate: Arc<dyn SceneDelegate>) -> Self {
		Self { id, scene_delegate }
	}

	pub fn id(&self) -> &sdf::Path {
		&self.id
	}

	/// Forward to the delegate's procedural computation entry point,
	/// passing `context` through unchanged.
	pub fn invoke(&self, context: &mut dyn ExtComputationContext) {
		self.scene_delegate.invoke_ext_computation(&self.id, context);
	}
}

impl std::fmt::Debug for ExtComputationCallbackDataSource {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ExtComputationCallbackDataSource")
			.field("id", &self.id)
			.field("scene_delegate", &Arc::as_ptr(&self.scene_delegate))
			.finish()
	}
}

// Equality and hashing are by identity: the prim path and the delegate
// instance, not anything the computation might produce.
impl PartialEq for ExtComputationCallbackDataSource {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id && Arc::ptr_eq(&self.scene_delegate, &other.scene_delegate)
	}
}

impl Eq for ExtComputationCallbackDataSource {}

impl Hash for ExtComputationCallbackDataSource {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
		(Arc::as_ptr(&self.scene_delegate) as *const ()).hash(state);
	}
}
