use super::{
	ContainerDataSource, ContainerDataSourceHandle, DataSource, DataSourceLocator,
	DataSourceLocatorSet, ExtComputationCallbackDataSource, MeshTopology,
	PrimvarDescriptor, RetainedContainerDataSource, RetainedSampledDataSource,
	RetainedVectorDataSource, SampledDataSource, SceneDelegate,
	HD_DATA_SOURCE_TOKENS, HD_LEGACY_PRIM_TYPE_TOKENS, HD_PRIM_TYPE_TOKENS,
};
use crate::{sdf, tf, vt};
use arc_swap::ArcSwapOption;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};
use thiserror::Error;
use tracing::{trace, warn};

/// Returns whether `prim_type` is one of the legacy volume-field asset types.
///
/// Total over all tokens; unrecognized types answer false.
pub fn legacy_prim_type_is_volume_field(prim_type: &tf::Token) -> bool {
	*prim_type == HD_LEGACY_PRIM_TYPE_TOKENS.openvdb_asset
		|| *prim_type == HD_LEGACY_PRIM_TYPE_TOKENS.field3d_asset
}

/// A malformed response from the scene delegate.
///
/// These are recovered locally by substituting empty values; a single
/// inconsistent prim must not abort traversal of the scene.
#[derive(Debug, Error)]
pub enum DelegateDataError {
	#[error("mesh topology for {id}: face vertex counts sum to {expected} but {actual} indices were provided")]
	MeshIndexCountMismatch {
		id: sdf::Path,
		expected: usize,
		actual: usize,
	},

	#[error("basis curves topology for {id}: curve vertex counts sum to {expected} but {actual} indices were provided")]
	CurveIndexCountMismatch {
		id: sdf::Path,
		expected: usize,
		actual: usize,
	},
}

/// One cache-worthy field group: unbuilt, built with a stored container, or
/// invalidated pending rebuild. Built values are immutable; invalidation
/// discards the stored handle so the next access rebuilds from the delegate.
#[derive(Default)]
enum CacheSlot {
	#[default]
	Unbuilt,
	Built(ContainerDataSourceHandle),
	Invalidated,
}

impl CacheSlot {
	fn built(&self) -> Option<ContainerDataSourceHandle> {
		match self {
			CacheSlot::Built(handle) => Some(handle.clone()),
			_ => None,
		}
	}

	/// Discard the stored container. Returns whether a value was discarded;
	/// a slot with nothing cached is left as it was.
	fn invalidate(&mut self) -> bool {
		match self {
			CacheSlot::Built(_) => {
				*self = CacheSlot::Invalidated;
				true
			}
			_ => false,
		}
	}
}

/// A sampled data source that defers the delegate value query to sampling
/// time, so building a container never pays for values nobody reads.
struct DelegateValueDataSource {
	id: sdf::Path,
	scene_delegate: Arc<dyn SceneDelegate>,
	key: tf::Token,
}

impl SampledDataSource for DelegateValueDataSource {
	fn value(&self, _shutter_offset: f64) -> vt::Value {
		self.scene_delegate.get(&self.id, &self.key)
	}
}

/// The primvars container for one prim.
///
/// The descriptor set is fixed at build time; each primvar's value is a
/// second level of lazy dispatch resolved against the delegate on demand.
struct PrimvarsDataSource {
	id: sdf::Path,
	scene_delegate: Arc<dyn SceneDelegate>,
	descriptors: Vec<PrimvarDescriptor>,
}

impl ContainerDataSource for PrimvarsDataSource {
	fn has(&self, name: &tf::Token) -> bool {
		self.descriptors.iter().any(|d| d.name == *name)
	}

	fn get_names(&self) -> Vec<tf::Token> {
		self.descriptors.iter().map(|d| d.name.clone()).collect()
	}

	fn get(&self, name: &tf::Token) -> Option<DataSource> {
		let tokens = &*HD_DATA_SOURCE_TOKENS;
		let descriptor = self.descriptors.iter().find(|d| d.name == *name)?;

		Some(
			RetainedContainerDataSource::new(vec![
				(
					tokens.primvar_value.clone(),
					DataSource::Sampled(Arc::new(DelegateValueDataSource {
						id: self.id.clone(),
						scene_delegate: self.scene_delegate.clone(),
						key: descriptor.name.clone(),
					})),
				),
				(
					tokens.interpolation.clone(),
					RetainedSampledDataSource::new(descriptor.interpolation.as_token())
						.into_source(),
				),
				(
					tokens.role.clone(),
					RetainedSampledDataSource::new(descriptor.role.clone()).into_source(),
				),
			])
			.into_source(),
		)
	}
}

/// A prim-level container data source adapting scene delegate calls into the
/// hierarchical form consumed by scene indices.
///
/// One adapter represents one prim for the lifetime of that prim in the
/// owning scene-index layer. The identifier and type tag are fixed at
/// construction; the delegate is shared with the owning layer, which must
/// keep it alive for as long as any adapter references it.
pub struct LegacyPrimDataSource {
	id: sdf::Path,
	prim_type: tf::Token,
	scene_delegate: Arc<dyn SceneDelegate>,

	// Cache-worthy groups, built lazily and cleared by prim_dirtied. The
	// owning layer serializes building against invalidation; the locks only
	// guard the slot state itself.
	primvars: RwLock<CacheSlot>,
	ext_computation_primvars: RwLock<CacheSlot>,
	topology: RwLock<CacheSlot>,

	// Instancer topology is published atomically, since downstream consumers
	// of the handle are not threadsafe. Racing builders are tolerated: each
	// stores a fully-built value and the last store wins.
	instancer_topology: ArcSwapOption<RetainedContainerDataSource>,
}

pub type LegacyPrimDataSourceHandle = Arc<LegacyPrimDataSource>;

impl LegacyPrimDataSource {
	pub fn new(
		id: sdf::Path,
		prim_type: tf::Token,
		scene_delegate: Arc<dyn SceneDelegate>,
	) -> Self {
		Self {
			id,
			prim_type,
			scene_delegate,
			primvars: RwLock::new(CacheSlot::Unbuilt),
			ext_computation_primvars: RwLock::new(CacheSlot::Unbuilt),
			topology: RwLock::new(CacheSlot::Unbuilt),
			instancer_topology: ArcSwapOption::empty(),
		}
	}

	pub fn id(&self) -> &sdf::Path {
		&self.id
	}

	pub fn prim_type(&self) -> &tf::Token {
		&self.prim_type
	}

	/// Clear cached field groups whose namespace intersects `locators`.
	///
	/// Groups not named by any locator keep their cached containers. Called
	/// by the owning layer from its change-processing path; callers must not
	/// run it concurrently with reads of the same adapter beyond what the
	/// atomic instancer-topology handle provides.
	pub fn prim_dirtied(&self, locators: &DataSourceLocatorSet) {
		let tokens = &*HD_DATA_SOURCE_TOKENS;

		if locators.intersects(&locator_for(&tokens.primvars))
			&& self.primvars.write().invalidate()
		{
			trace!(id = %self.id, "discarded cached primvars");
		}

		if locators.intersects(&locator_for(&tokens.ext_computation_primvars))
			&& self.ext_computation_primvars.write().invalidate()
		{
			trace!(id = %self.id, "discarded cached ext computation primvars");
		}

		if (locators.intersects(&locator_for(&tokens.mesh))
			|| locators.intersects(&locator_for(&tokens.basis_curves)))
			&& self.topology.write().invalidate()
		{
			trace!(id = %self.id, "discarded cached topology");
		}

		if locators.intersects(&locator_for(&tokens.instancer_topology))
			&& self.instancer_topology.swap(None).is_some()
		{
			trace!(id = %self.id, "discarded cached instancer topology");
		}
	}

	/// Return the cached container for `slot`, building it if needed.
	fn cached_container(
		&self,
		slot: &RwLock<CacheSlot>,
		build: impl FnOnce() -> ContainerDataSourceHandle,
	) -> DataSource {
		if let Some(handle) = slot.read().built() {
			return DataSource::Container(handle);
		}

		let mut guard = slot.write();
		// Another thread may have built between the read and the write.
		if let Some(handle) = guard.built() {
			return DataSource::Container(handle);
		}

		let handle = build();
		*guard = CacheSlot::Built(handle.clone());
		DataSource::Container(handle)
	}
}

// Field builders, one per dispatch table entry.
impl LegacyPrimDataSource {
	fn mesh_data_source(&self) -> Option<DataSource> {
		Some(self.cached_container(&self.topology, || {
			let tokens = &*HD_DATA_SOURCE_TOKENS;
			let topology = checked_mesh_topology(
				&self.id,
				self.scene_delegate.mesh_topology(&self.id).unwrap_or_default(),
			);

			Arc::new(RetainedContainerDataSource::new(vec![
				(
					tokens.topology.clone(),
					RetainedContainerDataSource::new(vec![
						(
							tokens.face_vertex_counts.clone(),
							RetainedSampledDataSource::new(topology.face_vertex_counts)
								.into_source(),
						),
						(
							tokens.face_vertex_indices.clone(),
							RetainedSampledDataSource::new(topology.face_vertex_indices)
								.into_source(),
						),
						(
							tokens.orientation.clone(),
							RetainedSampledDataSource::new(topology.orientation).into_source(),
						),
					])
					.into_source(),
				),
				(
					tokens.subdivision_scheme.clone(),
					RetainedSampledDataSource::new(topology.scheme).into_source(),
				),
			]))
		}))
	}

	fn basis_curves_data_source(&self) -> Option<DataSource> {
		Some(self.cached_container(&self.topology, || {
			let tokens = &*HD_DATA_SOURCE_TOKENS;
			let mut topology = self
				.scene_delegate
				.basis_curves_topology(&self.id)
				.unwrap_or_default();

			// Explicit curve indices must cover the vertex counts; implicit
			// (empty) indices are valid.
			if !topology.curve_indices.is_empty() {
				let expected: usize = topology
					.curve_vertex_counts
					.iter()
					.map(|c| (*c).max(0) as usize)
					.sum();
				if expected != topology.curve_indices.len() {
					warn!(
						"{}",
						DelegateDataError::CurveIndexCountMismatch {
							id: self.id.clone(),
							expected,
							actual: topology.curve_indices.len(),
						}
					);
					topology.curve_vertex_counts = vt::Array::new();
					topology.curve_indices = vt::Array::new();
				}
			}

			Arc::new(RetainedContainerDataSource::new(vec![(
				tokens.topology.clone(),
				RetainedContainerDataSource::new(vec![
					(
						tokens.curve_vertex_counts.clone(),
						RetainedSampledDataSource::new(topology.curve_vertex_counts)
							.into_source(),
					),
					(
						tokens.curve_indices.clone(),
						RetainedSampledDataSource::new(topology.curve_indices).into_source(),
					),
					(
						tokens.curve_type.clone(),
						RetainedSampledDataSource::new(topology.curve_type).into_source(),
					),
					(
						tokens.basis.clone(),
						RetainedSampledDataSource::new(topology.basis).into_source(),
					),
					(
						tokens.wrap.clone(),
						RetainedSampledDataSource::new(topology.wrap).into_source(),
					),
				])
				.into_source(),
			)]))
		}))
	}

	fn geom_subsets_data_source(&self) -> Option<DataSource> {
		let tokens = &*HD_DATA_SOURCE_TOKENS;
		let subsets = self.scene_delegate.geom_subsets(&self.id);
		if subsets.is_empty() {
			return None;
		}

		let entries = subsets
			.into_iter()
			.map(|subset| {
				let mut children = vec![
					(
						tokens.subset_type.clone(),
						RetainedSampledDataSource::new(subset.subset_type).into_source(),
					),
					(
						tokens.indices.clone(),
						RetainedSampledDataSource::new(subset.indices).into_source(),
					),
				];
				if let Some(binding) = subset.material_binding {
					children.push((
						tokens.material_binding.clone(),
						RetainedSampledDataSource::new(binding).into_source(),
					));
				}
				(
					subset.name,
					RetainedContainerDataSource::new(children).into_source(),
				)
			})
			.collect();

		Some(RetainedContainerDataSource::new(entries).into_source())
	}

	fn primvars_data_source(&self) -> Option<DataSource> {
		Some(self.cached_container(&self.primvars, || {
			Arc::new(PrimvarsDataSource {
				id: self.id.clone(),
				scene_delegate: self.scene_delegate.clone(),
				descriptors: self.scene_delegate.primvar_descriptors(&self.id),
			})
		}))
	}

	fn ext_computation_primvars_data_source(&self) -> Option<DataSource> {
		Some(self.cached_container(&self.ext_computation_primvars, || {
			let tokens = &*HD_DATA_SOURCE_TOKENS;
			let entries = self
				.scene_delegate
				.ext_computation_primvar_descriptors(&self.id)
				.into_iter()
				.map(|descriptor| {
					(
						descriptor.name,
						RetainedContainerDataSource::new(vec![
							(
								tokens.interpolation.clone(),
								RetainedSampledDataSource::new(
									descriptor.interpolation.as_token(),
								)
								.into_source(),
							),
							(
								tokens.role.clone(),
								RetainedSampledDataSource::new(descriptor.role).into_source(),
							),
							(
								tokens.source_computation.clone(),
								RetainedSampledDataSource::new(descriptor.source_computation)
									.into_source(),
							),
							(
								tokens.source_computation_output_name.clone(),
								RetainedSampledDataSource::new(
									descriptor.source_computation_output_name,
								)
								.into_source(),
							),
						])
						.into_source(),
					)
				})
				.collect();

			Arc::new(RetainedContainerDataSource::new(entries))
		}))
	}

	fn material_binding_data_source(&self) -> Option<DataSource> {
		let tokens = &*HD_DATA_SOURCE_TOKENS;
		let binding = self.scene_delegate.material_binding(&self.id)?;

		Some(
			RetainedContainerDataSource::new(vec![(
				tokens.all_purpose.clone(),
				RetainedContainerDataSource::new(vec![(
					tokens.path.clone(),
					RetainedSampledDataSource::new(binding).into_source(),
				)])
				.into_source(),
			)])
			.into_source(),
		)
	}

	fn xform_data_source(&self) -> Option<DataSource> {
		let tokens = &*HD_DATA_SOURCE_TOKENS;
		let matrix = self.scene_delegate.transform(&self.id);

		Some(
			RetainedContainerDataSource::new(vec![(
				tokens.matrix.clone(),
				RetainedSampledDataSource::new(matrix).into_source(),
			)])
			.into_source(),
		)
	}

	fn display_style_data_source(&self) -> Option<DataSource> {
		let tokens = &*HD_DATA_SOURCE_TOKENS;
		let style = self.scene_delegate.display_style(&self.id);

		Some(
			RetainedContainerDataSource::new(vec![
				(
					tokens.refine_level.clone(),
					RetainedSampledDataSource::new(style.refine_level).into_source(),
				),
				(
					tokens.flat_shading_enabled.clone(),
					RetainedSampledDataSource::new(style.flat_shading_enabled).into_source(),
				),
				(
					tokens.displacement_enabled.clone(),
					RetainedSampledDataSource::new(style.displacement_enabled).into_source(),
				),
			])
			.into_source(),
		)
	}

	fn instanced_by_data_source(&self) -> Option<DataSource> {
		let tokens = &*HD_DATA_SOURCE_TOKENS;
		let instancer = self.scene_delegate.instanced_by(&self.id)?;

		Some(
			RetainedContainerDataSource::new(vec![(
				tokens.paths.clone(),
				RetainedSampledDataSource::new(vt::Array::from(vec![instancer])).into_source(),
			)])
			.into_source(),
		)
	}

	fn instancer_topology_data_source(&self) -> Option<DataSource> {
		if let Some(existing) = self.instancer_topology.load_full() {
			return Some(DataSource::Container(existing));
		}

		// Build fully off to the side, then publish with one atomic store.
		// Concurrent builders each publish a complete, functionally
		// equivalent value; readers observe one of them, never a torn state.
		let tokens = &*HD_DATA_SOURCE_TOKENS;
		let prototypes = self.scene_delegate.instancer_prototypes(&self.id);
		let index_sets: Vec<DataSource> = prototypes
			.iter()
			.map(|prototype| {
				RetainedSampledDataSource::new(
					self.scene_delegate.instance_indices(&self.id, prototype),
				)
				.into_source()
			})
			.collect();

		let built = Arc::new(RetainedContainerDataSource::new(vec![
			(
				tokens.prototypes.clone(),
				RetainedSampledDataSource::new(prototypes).into_source(),
			),
			(
				tokens.instance_indices.clone(),
				RetainedVectorDataSource::new(index_sets).into_source(),
			),
		]));

		self.instancer_topology.store(Some(built.clone()));
		Some(DataSource::Container(built))
	}

	fn instance_categories_data_source(&self) -> Option<DataSource> {
		let tokens = &*HD_DATA_SOURCE_TOKENS;
		let per_instance: Vec<DataSource> = self
			.scene_delegate
			.instance_categories(&self.id)
			.into_iter()
			.map(|categories| categories_container(&categories).into_source())
			.collect();

		Some(
			RetainedContainerDataSource::new(vec![(
				tokens.categories_values.clone(),
				RetainedVectorDataSource::new(per_instance).into_source(),
			)])
			.into_source(),
		)
	}

	fn volume_field_binding_data_source(&self) -> Option<DataSource> {
		let entries = self
			.scene_delegate
			.volume_field_descriptors(&self.id)
			.into_iter()
			.map(|descriptor| {
				(
					descriptor.field_name,
					RetainedSampledDataSource::new(descriptor.field_id).into_source(),
				)
			})
			.collect();

		Some(RetainedContainerDataSource::new(entries).into_source())
	}

	fn coord_sys_binding_data_source(&self) -> Option<DataSource> {
		let entries = self
			.scene_delegate
			.coord_sys_bindings(&self.id)
			.into_iter()
			.map(|binding| {
				(
					binding.name,
					RetainedSampledDataSource::new(binding.binding_path).into_source(),
				)
			})
			.collect();

		Some(RetainedContainerDataSource::new(entries).into_source())
	}

	fn visibility_data_source(&self) -> Option<DataSource> {
		let tokens = &*HD_DATA_SOURCE_TOKENS;
		let visible = self.scene_delegate.visible(&self.id);

		Some(
			RetainedContainerDataSource::new(vec![(
				tokens.visibility.clone(),
				RetainedSampledDataSource::new(visible).into_source(),
			)])
			.into_source(),
		)
	}

	fn purpose_data_source(&self) -> Option<DataSource> {
		let tokens = &*HD_DATA_SOURCE_TOKENS;
		let purpose = self.scene_delegate.purpose(&self.id);

		Some(
			RetainedContainerDataSource::new(vec![(
				tokens.purpose.clone(),
				RetainedSampledDataSource::new(purpose).into_source(),
			)])
			.into_source(),
		)
	}

	fn extent_data_source(&self) -> Option<DataSource> {
		let tokens = &*HD_DATA_SOURCE_TOKENS;
		let extent = self.scene_delegate.extent(&self.id)?;

		Some(
			RetainedContainerDataSource::new(vec![
				(
					tokens.min.clone(),
					RetainedSampledDataSource::new(extent.min).into_source(),
				),
				(
					tokens.max.clone(),
					RetainedSampledDataSource::new(extent.max).into_source(),
				),
			])
			.into_source(),
		)
	}

	fn categories_data_source(&self) -> Option<DataSource> {
		let categories = self.scene_delegate.categories(&self.id);
		Some(categories_container(&categories).into_source())
	}

	fn volume_field_data_source(&self) -> Option<DataSource> {
		let tokens = &*HD_DATA_SOURCE_TOKENS;
		let field_keys = [
			tokens.file_path.clone(),
			tokens.field_name.clone(),
			tokens.field_index.clone(),
		];

		let entries = field_keys
			.into_iter()
			.map(|key| {
				(
					key.clone(),
					DataSource::Sampled(Arc::new(DelegateValueDataSource {
						id: self.id.clone(),
						scene_delegate: self.scene_delegate.clone(),
						key,
					})),
				)
			})
			.collect();

		Some(RetainedContainerDataSource::new(entries).into_source())
	}

	fn ext_computation_data_source(&self) -> Option<DataSource> {
		let tokens = &*HD_DATA_SOURCE_TOKENS;

		Some(
			RetainedContainerDataSource::new(vec![(
				tokens.cpu_callback.clone(),
				DataSource::Callback(Arc::new(ExtComputationCallbackDataSource::new(
					self.id.clone(),
					self.scene_delegate.clone(),
				))),
			)])
			.into_source(),
		)
	}
}

impl ContainerDataSource for LegacyPrimDataSource {
	fn has(&self, name: &tf::Token) -> bool {
		match FIELD_INDEX.get(name) {
			Some(&index) => (FIELD_TABLE[index].applies)(&self.prim_type),
			None => false,
		}
	}

	fn get_names(&self) -> Vec<tf::Token> {
		FIELD_TABLE
			.iter()
			.filter(|entry| (entry.applies)(&self.prim_type))
			.map(|entry| entry.name.clone())
			.collect()
	}

	fn get(&self, name: &tf::Token) -> Option<DataSource> {
		let &index = FIELD_INDEX.get(name)?;
		let entry = &FIELD_TABLE[index];
		if !(entry.applies)(&self.prim_type) {
			return None;
		}

		(entry.build)(self)
	}
}

fn categories_container(categories: &vt::Array<tf::Token>) -> RetainedContainerDataSource {
	RetainedContainerDataSource::new(
		categories
			.iter()
			.map(|category| {
				(
					category.clone(),
					RetainedSampledDataSource::new(true).into_source(),
				)
			})
			.collect(),
	)
}

fn checked_mesh_topology(id: &sdf::Path, topology: MeshTopology) -> MeshTopology {
	let expected: usize = topology
		.face_vertex_counts
		.iter()
		.map(|c| (*c).max(0) as usize)
		.sum();

	if expected != topology.face_vertex_indices.len() {
		warn!(
			"{}",
			DelegateDataError::MeshIndexCountMismatch {
				id: id.clone(),
				expected,
				actual: topology.face_vertex_indices.len(),
			}
		);
		return MeshTopology {
			scheme: topology.scheme,
			orientation: topology.orientation,
			..MeshTopology::default()
		};
	}

	topology
}

fn locator_for(token: &tf::Token) -> DataSourceLocator {
	DataSourceLocator::from_token(token.clone())
}

// Applicability predicates over the prim type tag. Pure and side-effect-free
// so has/get_names stay cheap.

fn applies_to_geometry(prim_type: &tf::Token) -> bool {
	let types = &*HD_PRIM_TYPE_TOKENS;
	*prim_type == types.mesh
		|| *prim_type == types.basis_curves
		|| *prim_type == types.points
		|| *prim_type == types.volume
}

fn applies_to_geometry_or_instancer(prim_type: &tf::Token) -> bool {
	applies_to_geometry(prim_type) || *prim_type == HD_PRIM_TYPE_TOKENS.instancer
}

fn applies_to_mesh(prim_type: &tf::Token) -> bool {
	*prim_type == HD_PRIM_TYPE_TOKENS.mesh
}

fn applies_to_basis_curves(prim_type: &tf::Token) -> bool {
	*prim_type == HD_PRIM_TYPE_TOKENS.basis_curves
}

fn applies_to_mesh_or_basis_curves(prim_type: &tf::Token) -> bool {
	applies_to_mesh(prim_type) || applies_to_basis_curves(prim_type)
}

fn applies_to_instancer(prim_type: &tf::Token) -> bool {
	*prim_type == HD_PRIM_TYPE_TOKENS.instancer
}

fn applies_to_volume(prim_type: &tf::Token) -> bool {
	*prim_type == HD_PRIM_TYPE_TOKENS.volume
}

fn applies_to_ext_computation(prim_type: &tf::Token) -> bool {
	*prim_type == HD_PRIM_TYPE_TOKENS.ext_computation
}

struct FieldEntry {
	name: tf::Token,
	applies: fn(&tf::Token) -> bool,
	build: fn(&LegacyPrimDataSource) -> Option<DataSource>,
}

/// The dispatch table: one entry per field group, in get_names order.
static FIELD_TABLE: LazyLock<Vec<FieldEntry>> = LazyLock::new(|| {
	let tokens = &*HD_DATA_SOURCE_TOKENS;

	vec![
		FieldEntry {
			name: tokens.mesh.clone(),
			applies: applies_to_mesh,
			build: |ds| ds.mesh_data_source(),
		},
		FieldEntry {
			name: tokens.basis_curves.clone(),
			applies: applies_to_basis_curves,
			build: |ds| ds.basis_curves_data_source(),
		},
		FieldEntry {
			name: tokens.geom_subsets.clone(),
			applies: applies_to_mesh,
			build: |ds| ds.geom_subsets_data_source(),
		},
		FieldEntry {
			name: tokens.primvars.clone(),
			applies: applies_to_geometry_or_instancer,
			build: |ds| ds.primvars_data_source(),
		},
		FieldEntry {
			name: tokens.ext_computation_primvars.clone(),
			applies: applies_to_geometry,
			build: |ds| ds.ext_computation_primvars_data_source(),
		},
		FieldEntry {
			name: tokens.material_binding.clone(),
			applies: applies_to_geometry,
			build: |ds| ds.material_binding_data_source(),
		},
		FieldEntry {
			name: tokens.xform.clone(),
			applies: applies_to_geometry_or_instancer,
			build: |ds| ds.xform_data_source(),
		},
		FieldEntry {
			name: tokens.display_style.clone(),
			applies: applies_to_mesh_or_basis_curves,
			build: |ds| ds.display_style_data_source(),
		},
		FieldEntry {
			name: tokens.instanced_by.clone(),
			applies: applies_to_geometry_or_instancer,
			build: |ds| ds.instanced_by_data_source(),
		},
		FieldEntry {
			name: tokens.instancer_topology.clone(),
			applies: applies_to_instancer,
			build: |ds| ds.instancer_topology_data_source(),
		},
		FieldEntry {
			name: tokens.instance_categories.clone(),
			applies: applies_to_instancer,
			build: |ds| ds.instance_categories_data_source(),
		},
		FieldEntry {
			name: tokens.volume_field_binding.clone(),
			applies: applies_to_volume,
			build: |ds| ds.volume_field_binding_data_source(),
		},
		FieldEntry {
			name: tokens.coord_sys_binding.clone(),
			applies: applies_to_geometry,
			build: |ds| ds.coord_sys_binding_data_source(),
		},
		FieldEntry {
			name: tokens.visibility.clone(),
			applies: applies_to_geometry_or_instancer,
			build: |ds| ds.visibility_data_source(),
		},
		FieldEntry {
			name: tokens.purpose.clone(),
			applies: applies_to_geometry,
			build: |ds| ds.purpose_data_source(),
		},
		FieldEntry {
			name: tokens.extent.clone(),
			applies: applies_to_geometry,
			build: |ds| ds.extent_data_source(),
		},
		FieldEntry {
			name: tokens.categories.clone(),
			applies: applies_to_geometry_or_instancer,
			build: |ds| ds.categories_data_source(),
		},
		FieldEntry {
			name: tokens.volume_field.clone(),
			applies: legacy_prim_type_is_volume_field,
			build: |ds| ds.volume_field_data_source(),
		},
		FieldEntry {
			name: tokens.ext_computation.clone(),
			applies: applies_to_ext_computation,
			build: |ds| ds.ext_computation_data_source(),
		},
	]
});

static FIELD_INDEX: LazyLock<HashMap<tf::Token, usize>> = LazyLock::new(|| {
	FIELD_TABLE
		.iter()
		.enumerate()
		.map(|(index, entry)| (entry.name.clone(), index))
		.collect()
});
