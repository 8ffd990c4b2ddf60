use crate::declare_public_tokens;

declare_public_tokens!(
	DataSourceTokens,
	HD_DATA_SOURCE_TOKENS,
	[
		// Prim-level field groups, in the order get_names reports them.
		mesh: "mesh",
		basis_curves: "basisCurves",
		geom_subsets: "geomSubsets",
		primvars: "primvars",
		ext_computation_primvars: "extComputationPrimvars",
		material_binding: "materialBinding",
		xform: "xform",
		display_style: "displayStyle",
		instanced_by: "instancedBy",
		instancer_topology: "instancerTopology",
		instance_categories: "instanceCategories",
		volume_field_binding: "volumeFieldBinding",
		coord_sys_binding: "coordSysBinding",
		visibility: "visibility",
		purpose: "purpose",
		extent: "extent",
		categories: "categories",
		volume_field: "volumeField",
		ext_computation: "extComputation",

		// Nested container children.
		topology: "topology",
		face_vertex_counts: "faceVertexCounts",
		face_vertex_indices: "faceVertexIndices",
		orientation: "orientation",
		subdivision_scheme: "subdivisionScheme",
		curve_vertex_counts: "curveVertexCounts",
		curve_indices: "curveIndices",
		curve_type: "type",
		basis: "basis",
		wrap: "wrap",
		primvar_value: "primvarValue",
		interpolation: "interpolation",
		role: "role",
		source_computation: "sourceComputation",
		source_computation_output_name: "sourceComputationOutputName",
		all_purpose: "allPurpose",
		path: "path",
		matrix: "matrix",
		refine_level: "refineLevel",
		flat_shading_enabled: "flatShadingEnabled",
		displacement_enabled: "displacementEnabled",
		paths: "paths",
		prototypes: "prototypes",
		instance_indices: "instanceIndices",
		categories_values: "categoriesValues",
		subset_type: "type",
		indices: "indices",
		field_name: "fieldName",
		file_path: "filePath",
		field_index: "fieldIndex",
		cpu_callback: "cpuCallback",
		min: "min",
		max: "max",
	]
);

declare_public_tokens!(
	PrimTypeTokens,
	HD_PRIM_TYPE_TOKENS,
	[
		mesh: "mesh",
		basis_curves: "basisCurves",
		points: "points",
		volume: "volume",
		instancer: "instancer",
		ext_computation: "extComputation",
		openvdb_asset: "openvdbAsset",
		field3d_asset: "field3dAsset",
	]
);

declare_public_tokens!(
	InterpolationTokens,
	HD_INTERPOLATION_TOKENS,
	[
		constant: "constant",
		uniform: "uniform",
		varying: "varying",
		vertex: "vertex",
		face_varying: "faceVarying",
		instance: "instance",
	]
);

declare_public_tokens!(
	LegacyPrimTypeTokens,
	HD_LEGACY_PRIM_TYPE_TOKENS,
	[
		openvdb_asset: "openvdbAsset",
		field3d_asset: "field3dAsset",
	]
);
