use super::HD_INTERPOLATION_TOKENS;
use crate::{gf, sdf, tf, vt};
use std::any::Any;

/// How a primvar's values map onto a prim's topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interpolation {
	Constant,
	Uniform,
	Varying,
	Vertex,
	FaceVarying,
	Instance,
}

impl Interpolation {
	pub fn as_token(&self) -> tf::Token {
		let tokens = &*HD_INTERPOLATION_TOKENS;
		match self {
			Interpolation::Constant => tokens.constant.clone(),
			Interpolation::Uniform => tokens.uniform.clone(),
			Interpolation::Varying => tokens.varying.clone(),
			Interpolation::Vertex => tokens.vertex.clone(),
			Interpolation::FaceVarying => tokens.face_varying.clone(),
			Interpolation::Instance => tokens.instance.clone(),
		}
	}
}

/// Describes one primvar authored on a prim, without its value.
#[derive(Debug, Clone)]
pub struct PrimvarDescriptor {
	pub name: tf::Token,
	pub interpolation: Interpolation,
	pub role: tf::Token,
}

/// Describes one primvar whose value is produced by an ext computation
/// rather than authored on the prim.
#[derive(Debug, Clone)]
pub struct ExtComputationPrimvarDescriptor {
	pub name: tf::Token,
	pub interpolation: Interpolation,
	pub role: tf::Token,
	pub source_computation: sdf::Path,
	pub source_computation_output_name: tf::Token,
}

/// The face-vertex description of a polygonal mesh.
#[derive(Debug, Clone, Default)]
pub struct MeshTopology {
	pub scheme: tf::Token,
	pub orientation: tf::Token,
	pub face_vertex_counts: vt::Array<i32>,
	pub face_vertex_indices: vt::Array<i32>,
}

/// The vertex-count description of a batch of basis curves.
#[derive(Debug, Clone, Default)]
pub struct BasisCurvesTopology {
	pub curve_type: tf::Token,
	pub basis: tf::Token,
	pub wrap: tf::Token,
	pub curve_vertex_counts: vt::Array<i32>,
	pub curve_indices: vt::Array<i32>,
}

/// Refinement and shading switches for a drawn prim.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayStyle {
	pub refine_level: i32,
	pub flat_shading_enabled: bool,
	pub displacement_enabled: bool,
}

/// Describes one volume field referenced by a volume prim.
#[derive(Debug, Clone)]
pub struct VolumeFieldDescriptor {
	pub field_name: tf::Token,
	pub field_id: sdf::Path,
}

/// Associates a named coordinate system with the prim that defines its frame.
#[derive(Debug, Clone)]
pub struct CoordSysBinding {
	pub name: tf::Token,
	pub binding_path: sdf::Path,
}

/// A named subdivision of a mesh's faces, with an optional material of its own.
#[derive(Debug, Clone)]
pub struct GeomSubset {
	pub name: tf::Token,
	pub subset_type: tf::Token,
	pub indices: vt::Array<i32>,
	pub material_binding: Option<sdf::Path>,
}

/// Opaque execution state handed to an ext computation by the execution
/// engine. The emulation layer passes it through unchanged.
pub trait ExtComputationContext: Send {
	fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// The legacy imperative source of per-prim attribute values.
///
/// Every query is synchronous and keyed by prim identifier. "Not present" is
/// a first-class answer, distinct from any real value; the provided defaults
/// answer "not present" everywhere so partial implementations stay small.
///
/// Implementations are not required to tolerate arbitrary concurrent calls;
/// the layer that owns the delegate is responsible for whatever serialization
/// the delegate needs.
pub trait SceneDelegate: Send + Sync {
	fn mesh_topology(&self, _id: &sdf::Path) -> Option<MeshTopology> {
		None
	}

	fn basis_curves_topology(&self, _id: &sdf::Path) -> Option<BasisCurvesTopology> {
		None
	}

	/// All primvars authored on the prim, across all interpolations.
	fn primvar_descriptors(&self, _id: &sdf::Path) -> Vec<PrimvarDescriptor> {
		Vec::new()
	}

	/// Fetch a named value on the prim (primvar payloads, volume field
	/// parameters). The empty value means "not present".
	fn get(&self, _id: &sdf::Path, _key: &tf::Token) -> vt::Value {
		vt::Value::empty()
	}

	fn ext_computation_primvar_descriptors(
		&self,
		_id: &sdf::Path,
	) -> Vec<ExtComputationPrimvarDescriptor> {
		Vec::new()
	}

	fn material_binding(&self, _id: &sdf::Path) -> Option<sdf::Path> {
		None
	}

	fn transform(&self, _id: &sdf::Path) -> gf::Matrix4d {
		gf::Matrix4d::identity()
	}

	fn display_style(&self, _id: &sdf::Path) -> DisplayStyle {
		DisplayStyle::default()
	}

	/// The instancer this prim is instanced by, if any.
	fn instanced_by(&self, _id: &sdf::Path) -> Option<sdf::Path> {
		None
	}

	fn instancer_prototypes(&self, _id: &sdf::Path) -> vt::Array<sdf::Path> {
		vt::Array::new()
	}

	/// The instance indices the instancer assigns to one of its prototypes.
	fn instance_indices(
		&self,
		_instancer_id: &sdf::Path,
		_prototype_id: &sdf::Path,
	) -> vt::Array<i32> {
		vt::Array::new()
	}

	fn visible(&self, _id: &sdf::Path) -> bool {
		true
	}

	fn purpose(&self, _id: &sdf::Path) -> tf::Token {
		tf::Token::new("geometry")
	}

	fn extent(&self, _id: &sdf::Path) -> Option<gf::Range3d> {
		None
	}

	fn categories(&self, _id: &sdf::Path) -> vt::Array<tf::Token> {
		vt::Array::new()
	}

	/// Per-instance category sets, indexed like the instancer's instances.
	fn instance_categories(&self, _id: &sdf::Path) -> Vec<vt::Array<tf::Token>> {
		Vec::new()
	}

	fn volume_field_descriptors(&self, _id: &sdf::Path) -> Vec<VolumeFieldDescriptor> {
		Vec::new()
	}

	fn coord_sys_bindings(&self, _id: &sdf::Path) -> Vec<CoordSysBinding> {
		Vec::new()
	}

	fn geom_subsets(&self, _id: &sdf::Path) -> Vec<GeomSubset> {
		Vec::new()
	}

	/// Run the prim's procedural computation against `context`. Called by the
	/// execution engine through [`super::ExtComputationCallbackDataSource`],
	/// never during container traversal.
	fn invoke_ext_computation(&self, _id: &sdf::Path, _context: &mut dyn ExtComputationContext) {}
}
